pub mod kv;
pub mod prefs;
