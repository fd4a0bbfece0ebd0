pub mod clustering;
pub mod exports;
pub mod projections;
pub mod shared;
pub mod usecases;
