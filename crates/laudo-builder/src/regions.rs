//! One module per anatomical region, each implementing [`crate::Region`].

pub mod bile_ducts;
pub mod bladder;
pub mod bowel;
pub mod free_fluid;
pub mod gallbladder;
pub mod kidneys;
pub mod limitations;
pub mod liver;
pub mod observations;
pub mod pancreas;
pub mod spleen;
pub mod vessels;
