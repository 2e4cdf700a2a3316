//! Domain layer - pagination core and the record source boundary

pub mod pagination;

pub use pagination::{paginate, paginate_request, Paginate, RecordSource};
