pub mod db;
pub mod key_value {
    pub mod entity;
    pub mod in_memory;
    pub mod postgres;
}
