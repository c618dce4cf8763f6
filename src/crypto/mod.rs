pub mod cipher_traits;
pub mod codec;
pub mod des;
pub mod des_tables;
pub mod error;
pub mod f_function;
pub mod feistel_network;
pub mod key_schedule;
pub mod keygen;
pub mod utils;
