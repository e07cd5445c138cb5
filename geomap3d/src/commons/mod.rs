pub mod time_steps;
