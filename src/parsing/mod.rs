
//! The front half of the evaluation pipeline: turning expression text
//! into a postfix token sequence.

pub mod classify;
pub mod expr_tokenizer;
pub mod operator;
pub mod shunting_yard;
pub mod source;
pub mod token;
pub mod tokenizer;
