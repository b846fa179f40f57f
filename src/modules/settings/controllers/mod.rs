pub mod settings_controller;
