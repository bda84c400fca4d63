pub mod application {
    pub mod access {
        pub mod authorize;
    }
    pub mod analytics {
        pub mod by_day;
        pub mod by_market;
        pub mod summary;
    }
    pub mod item {
        pub mod create;
        pub mod delete;
        pub mod mark_purchased;
        pub mod unmark_purchased;
        pub mod update;
    }
    pub mod list {
        pub mod create;
        pub mod delete;
        pub mod duplicate;
        pub mod get_all;
        pub mod get_by_id;
        pub mod share;
        pub mod unshare;
        pub mod update;
    }
    pub mod market {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod update;
    }
    pub mod profile {
        pub mod get;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod access {
        pub mod errors;
        pub mod model;
        pub mod service;
    }
    pub mod analytics {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod by_day;
            pub mod by_market;
            pub mod summary;
        }
    }
    pub mod item {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod mark_purchased;
            pub mod unmark_purchased;
            pub mod update;
        }
    }
    pub mod list {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod duplicate;
            pub mod get_all;
            pub mod get_by_id;
            pub mod share;
            pub mod unshare;
            pub mod update;
        }
    }
    pub mod list_share {
        pub mod model;
        pub mod repository;
    }
    pub mod market {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod update;
        }
    }
    pub mod profile {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
