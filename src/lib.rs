// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod core {
    pub mod event;
    pub mod ports;
    pub mod search;
}

pub mod application {
    pub mod command;
    pub mod command_handler;
}

pub mod adapters {
    pub mod in_memory {
        pub mod in_memory_event_store;
        pub mod shared_event_store;
    }
}

pub mod shell;
