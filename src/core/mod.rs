pub mod aggregate;
pub mod convert;
pub mod logic;
pub mod reader;
pub mod storage;
