pub mod shared {
    pub mod core {
        pub mod draft;
        pub mod modal;
        pub mod notice;
        pub mod primitives;
        pub mod selection;
    }
}

pub mod modules {
    pub mod time_entries {
        pub mod core {
            pub mod collection;
            pub mod events;
            pub mod evolve;
            pub mod fields;
            pub mod time_entry;
        }
        pub mod use_cases {
            pub mod add_time_entry {
                pub mod command;
                pub mod decide;
                pub mod decision;
            }
        }
        pub mod controller;
        pub mod errors;
    }
    pub mod profile {
        pub mod controller;
        pub mod fields;
        pub mod stats;
        pub mod user_profile;
    }
    pub mod settings {
        pub mod controller;
        pub mod defaults;
        pub mod setting;
    }
    pub mod session {
        pub mod login;
    }
    pub mod schedule {
        pub mod shift;
    }
    pub mod projects {
        pub mod project;
    }
}

pub mod shell;
