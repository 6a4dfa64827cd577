mod appointment_test;
mod config_test;
mod health_test;
mod middleware_test;
mod schedule_test;
mod slots_test;
