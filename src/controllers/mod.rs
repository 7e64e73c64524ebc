pub mod scooter_controller;
