pub mod fixed;
pub mod openai;
