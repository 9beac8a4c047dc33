pub mod events {
    pub mod event;
}
