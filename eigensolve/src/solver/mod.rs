mod jacobi;
mod ql;
mod trig;
pub use jacobi::Jacobi;
pub use ql::SymmetricQl;
pub use trig::Trigonometric;
