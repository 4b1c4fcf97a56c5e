pub mod shared {
    pub mod infrastructure {
        pub mod key_value_store;
    }
}

pub mod modules {
    pub mod cart {
        pub mod core {
            pub mod events;
            pub mod evolve;
            pub mod line_item;
            pub mod state;
        }
        pub mod use_cases {
            pub mod hydrate_cart {
                pub mod handler;
            }
            pub mod update_cart {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod provider;
            }
            pub mod outbound {
                pub mod cart_storage;
            }
        }
    }
}

pub mod shell;
