pub mod autoscaling_status;

pub use autoscaling_status::AutoscalingStatusCommand;

#[cfg(test)]
mod autoscaling_status_test;
