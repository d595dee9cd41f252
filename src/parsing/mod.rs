/// CSV tables with named, multi-spelling column lookup
pub mod csv_table;
