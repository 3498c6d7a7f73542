//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` when a migration changes the tables.

diesel::table! {
    /// Users named by purchase files. Ids are supplied by the file.
    users (id) {
        id -> Int8,
        name -> Varchar,
    }
}

diesel::table! {
    /// Products referenced by order lines.
    products (id) {
        id -> Int8,
    }
}

diesel::table! {
    /// Orders placed by users.
    orders (id) {
        id -> Int8,
        user_id -> Int8,
        date -> Date,
    }
}

diesel::table! {
    /// Priced order lines. `id` is a surrogate assigned by the store.
    order_products (id) {
        id -> Int8,
        order_id -> Int8,
        product_id -> Int8,
        value -> Numeric,
    }
}

diesel::allow_tables_to_appear_in_same_query!(order_products, orders, products, users);
