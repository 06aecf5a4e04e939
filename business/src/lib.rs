pub mod application {
    pub mod inventory {
        pub mod stats;
        pub mod store;
        #[cfg(test)]
        pub(crate) mod testing;
    }
    pub mod product {
        pub mod clear;
        pub mod create;
        pub mod delete;
        pub mod extract;
        pub mod get_all;
    }
    pub mod recommendation {
        pub mod generate;
    }
}

pub mod domain {
    pub mod clock;
    pub mod errors;
    pub mod logger;
    pub mod inventory {
        pub mod codec;
        pub mod events;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_stats;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod status;
        pub mod value_objects;
        pub mod use_cases {
            pub mod clear;
            pub mod create;
            pub mod delete;
            pub mod extract;
            pub mod get_all;
        }
    }
    pub mod recommendation {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod generate;
        }
    }
}
