//! Diesel schema for project and task tracking persistence.

diesel::table! {
    /// Project records.
    projects (id) {
        /// Assigned project identifier.
        id -> BigInt,
        /// Project title.
        #[max_length = 255]
        title -> Varchar,
        /// Project description.
        description -> Text,
        /// Sponsoring client, mutually exclusive with `company_id`.
        client_id -> Nullable<BigInt>,
        /// Sponsoring company, mutually exclusive with `client_id`.
        company_id -> Nullable<BigInt>,
        /// Ordered task identifier list.
        task_ids -> Jsonb,
        /// Soft-delete flag.
        deleted -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Assigned task identifier.
        id -> BigInt,
        /// Task name.
        #[max_length = 255]
        name -> Varchar,
        /// Task description.
        description -> Text,
        /// Lifecycle status.
        #[max_length = 20]
        status -> Varchar,
        /// Duration in milliseconds.
        duration_ms -> BigInt,
        /// Owning project, if any.
        project_id -> Nullable<BigInt>,
        /// Soft-delete flag.
        deleted -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Client records.
    clients (id) {
        /// Assigned client identifier.
        id -> BigInt,
        /// Client name.
        #[max_length = 255]
        name -> Varchar,
        /// Free-form contact information.
        contact_info -> Text,
    }
}

diesel::table! {
    /// Company records.
    companies (id) {
        /// Assigned company identifier.
        id -> BigInt,
        /// Company name.
        #[max_length = 255]
        name -> Varchar,
        /// Postal address.
        address -> Text,
        /// Free-form contact information.
        contact_info -> Text,
    }
}
