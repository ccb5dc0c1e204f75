mod math;
mod new;
