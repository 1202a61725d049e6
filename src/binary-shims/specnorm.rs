fn main() { ::specnorm_tasks::entry_points::specnorm() }
