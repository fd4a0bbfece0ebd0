pub mod p300_sales_data;
