//! Record sources that need no database

mod memory;
