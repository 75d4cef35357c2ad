#![no_std]

pub mod proxy_price_consumer;
pub mod proxy_price_oracle;
pub mod proxy_price_reader;
