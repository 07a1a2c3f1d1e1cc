pub mod forms;
pub mod output;
pub mod summary;
pub mod table;
