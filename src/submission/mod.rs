pub mod nullable;
pub mod pipeline;
pub mod validate;
