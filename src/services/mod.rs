pub mod booking_service;
