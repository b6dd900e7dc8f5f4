pub mod notification_manager;
