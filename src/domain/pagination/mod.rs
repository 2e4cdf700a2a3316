//! Page/size pagination over any [`RecordSource`].

mod paginator;
mod source;

pub use paginator::{paginate, paginate_request, Paginate};
pub use source::RecordSource;
