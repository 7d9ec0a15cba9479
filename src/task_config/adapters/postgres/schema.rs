//! Diesel schema for task configuration storage.

diesel::table! {
    /// Follow-up states configured per identity import task.
    workflow_task_identity_import_cf (id_task) {
        /// Configured task.
        id_task -> Int4,
        /// Target workflow.
        id_workflow -> Int4,
        /// State reached once an identity was inserted.
        id_state1 -> Int4,
        /// State reached once an identity was selected.
        id_state2 -> Int4,
        /// State reached on duplicate suspicion.
        id_state3 -> Int4,
    }
}
