//! Diesel schema for candidate identity storage.

diesel::table! {
    /// Candidate identities submitted by client applications.
    identityimport_candidate_identity (id_candidate_identity) {
        /// Candidate identifier.
        id_candidate_identity -> Int4,
        /// Import batch the candidate belongs to.
        id_batch -> Int4,
        /// Remote customer id, once imported or selected.
        #[max_length = 50]
        customer_id -> Nullable<Varchar>,
        /// Connection id of the account behind the candidate.
        #[max_length = 100]
        connection_id -> Nullable<Varchar>,
        /// Code of the submitting client application.
        #[max_length = 100]
        client_app_code -> Varchar,
        /// Intake status.
        #[max_length = 50]
        status -> Varchar,
    }
}

diesel::table! {
    /// Attributes claimed by candidate identities.
    identityimport_candidate_identity_attribute (id_attribute) {
        /// Attribute row identifier.
        id_attribute -> Int4,
        /// Owning candidate.
        id_candidate_identity -> Int4,
        /// Attribute code.
        #[max_length = 100]
        code -> Varchar,
        /// Attribute value.
        attribute_value -> Text,
        /// Certification process code.
        #[max_length = 100]
        cert_process -> Nullable<Varchar>,
        /// Certification timestamp.
        cert_date -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    /// Task outcomes keyed by workflow resource history entry.
    identityimport_candidate_identity_history (id_history) {
        /// History row identifier.
        id_history -> Int4,
        /// Workflow resource history entry.
        id_wf_resource_history -> Int4,
        /// Outcome status.
        #[max_length = 50]
        status -> Varchar,
        /// Outcome description.
        comment -> Text,
        /// Creation timestamp.
        creation_date -> Timestamptz,
    }
}
