pub mod bile_ducts;
pub mod bladder;
pub mod bowel;
pub mod free_fluid;
pub mod gallbladder;
pub mod kidneys;
pub mod liver;
pub mod observations;
pub mod pancreas;
pub mod patient;
pub mod record;
pub mod report;
pub mod settings;
pub mod spleen;
pub mod vessels;
