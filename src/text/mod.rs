// Text handling — normalization, tokenization and vocabulary encoding.

pub mod normalize;
pub mod tokenizer;
pub mod vocabulary;
