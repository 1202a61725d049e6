pub use specnorm_kernel as kernel;
pub use specnorm_tasks as tasks;
