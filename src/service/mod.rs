//! TodoService: todo operations over the storage interface.

mod todo;
mod validation;
pub use todo::TodoService;
pub use validation::RequestValidator;
