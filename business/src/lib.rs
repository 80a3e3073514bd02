pub mod application {
    pub mod product {
        pub mod get_all;
        pub mod list_page;
        pub mod populate;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_all;
            pub mod list_page;
            pub mod populate;
        }
    }
}
