pub mod excel_importer;
pub mod icons;
pub mod storage;
