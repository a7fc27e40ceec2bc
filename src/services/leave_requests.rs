use uuid::Uuid;

use crate::{
    errors::AppError,
    repositories::Store,
    structs::{
        auth::{CurrentUser, Role},
        leave_requests::{
            CreateLeaveRequest, LeaveRequest, LeaveStatus, NewLeaveRequest, UpdateLeaveRequest,
        },
        timestamp,
    },
};

const NOT_FOUND: &str = "Leave request not found";

/// 新的請假單一律是 pending, person 取自呼叫者而不是 body
pub async fn create(
    store: &dyn Store,
    caller: Option<&CurrentUser>,
    body: CreateLeaveRequest,
) -> Result<LeaveRequest, AppError> {
    let person = caller
        .and_then(CurrentUser::identity)
        .ok_or(AppError::Authentication)?;

    let request = NewLeaveRequest {
        person: person.to_string(),
        start: body.start,
        end: body.end,
        status: LeaveStatus::Pending,
    };

    store
        .create_leave_request(request)
        .await
        .map_err(AppError::internal("Failed to create leave request."))
}

pub async fn list(store: &dyn Store) -> Result<Vec<LeaveRequest>, AppError> {
    store
        .find_leave_requests()
        .await
        .map_err(AppError::internal("Failed to fetch leave requests"))
}

pub async fn get(store: &dyn Store, id: Uuid) -> Result<LeaveRequest, AppError> {
    store
        .find_leave_request(id)
        .await
        .map_err(AppError::internal("Failed to fetch leave request"))?
        .ok_or(AppError::NotFound(NOT_FOUND))
}

pub async fn update(
    store: &dyn Store,
    caller: &CurrentUser,
    id: Uuid,
    body: UpdateLeaveRequest,
) -> Result<LeaveRequest, AppError> {
    const CONTEXT: &str = "Failed to update leave request";

    let mut request = store
        .find_leave_request(id)
        .await
        .map_err(AppError::internal(CONTEXT))?
        .ok_or(AppError::NotFound(NOT_FOUND))?;

    apply_update(caller, &mut request, body)?;

    store
        .update_leave_request(&request)
        .await
        .map_err(AppError::internal(CONTEXT))?
        .ok_or(AppError::NotFound(NOT_FOUND))
}

/// 依角色套用更新
///
/// - manager 只能改 `status`, 日期與 person 不動
/// - 其他人只能改自己的請假單, 而且只能改 `start` / `end`
///
/// 先檢查擁有者, 再解析該角色會用到的欄位; 其他欄位不管值是什麼都忽略
pub fn apply_update(
    caller: &CurrentUser,
    request: &mut LeaveRequest,
    body: UpdateLeaveRequest,
) -> Result<(), AppError> {
    match caller.role {
        Role::Manager => {
            let status = body
                .status
                .decode("status", serde_json::from_value::<LeaveStatus>)?;

            status.apply_required("status", &mut request.status)?;
        }
        Role::Employee => {
            if caller.identity() != Some(request.person.as_str()) {
                return Err(AppError::Forbidden(
                    "Not authorized to update this leave request",
                ));
            }

            let start = body.start.decode("start", timestamp::from_value)?;
            let end = body.end.decode("end", timestamp::from_value)?;

            start.check_required("start")?;
            end.check_required("end")?;
            start.apply_required("start", &mut request.start)?;
            end.apply_required("end", &mut request.end)?;
        }
    }

    tracing::debug!(
        "leave request {} updated by {:?} ({:?})",
        request.id,
        caller.identity(),
        caller.role
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        repositories::{LeaveRequestStore, MemoryStore},
        services::testing::{at, FailingStore},
        structs::patch::Patch,
    };

    fn employee(name: &str) -> CurrentUser {
        CurrentUser {
            name: Some(name.to_string()),
            role: Role::Employee,
        }
    }

    fn manager(name: &str) -> CurrentUser {
        CurrentUser {
            name: Some(name.to_string()),
            role: Role::Manager,
        }
    }

    fn raw<T: serde::Serialize>(value: T) -> Patch<serde_json::Value> {
        Patch::Value(serde_json::to_value(value).unwrap())
    }

    fn august() -> CreateLeaveRequest {
        CreateLeaveRequest {
            start: at(2025, 8, 11, 0),
            end: at(2025, 8, 15, 0),
        }
    }

    async fn seeded(store: &MemoryStore, owner: &str) -> LeaveRequest {
        create(store, Some(&employee(owner)), august()).await.unwrap()
    }

    #[tokio::test]
    async fn create_without_caller_persists_nothing() {
        let store = MemoryStore::new();

        let err = create(&store, None, august()).await.unwrap_err();
        assert!(matches!(err, AppError::Authentication));

        let nameless = CurrentUser {
            name: None,
            role: Role::Employee,
        };
        let err = create(&store, Some(&nameless), august()).await.unwrap_err();
        assert!(matches!(err, AppError::Authentication));

        assert!(store.find_leave_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_is_pending_and_owned_by_caller() {
        let store = MemoryStore::new();
        let request = seeded(&store, "Alice").await;

        assert_eq!(request.person, "Alice");
        assert_eq!(request.status, LeaveStatus::Pending);
        assert_eq!(request.start, at(2025, 8, 11, 0));
    }

    #[tokio::test]
    async fn list_with_no_records_is_empty() {
        let store = MemoryStore::new();
        assert!(list(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn owner_can_move_dates_but_not_status() {
        let store = MemoryStore::new();
        let request = seeded(&store, "Alice").await;

        let body = UpdateLeaveRequest {
            start: raw(at(2025, 9, 1, 0)),
            end: Patch::Absent,
            status: raw(LeaveStatus::Approved),
        };
        let updated = update(&store, &employee("Alice"), request.id, body)
            .await
            .unwrap();

        assert_eq!(updated.start, at(2025, 9, 1, 0));
        assert_eq!(updated.end, request.end);
        assert_eq!(updated.status, LeaveStatus::Pending);
    }

    #[tokio::test]
    async fn other_employee_is_forbidden_and_record_unchanged() {
        let store = MemoryStore::new();
        let request = seeded(&store, "Alice").await;

        let body = UpdateLeaveRequest {
            start: raw(at(2025, 9, 1, 0)),
            ..Default::default()
        };
        let err = update(&store, &employee("Mallory"), request.id, body)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Forbidden(_)));
        assert_eq!(
            store.find_leave_request(request.id).await.unwrap(),
            Some(request)
        );
    }

    #[tokio::test]
    async fn manager_changes_only_status() {
        let store = MemoryStore::new();
        let request = seeded(&store, "Alice").await;

        let body = UpdateLeaveRequest {
            start: raw(at(2030, 1, 1, 0)),
            end: raw(at(2030, 1, 2, 0)),
            status: raw(LeaveStatus::Denied),
        };
        let updated = update(&store, &manager("Boss"), request.id, body)
            .await
            .unwrap();

        assert_eq!(updated.status, LeaveStatus::Denied);
        assert_eq!(updated.start, request.start);
        assert_eq!(updated.end, request.end);
        assert_eq!(updated.person, "Alice");
    }

    #[tokio::test]
    async fn manager_without_status_keeps_it() {
        let store = MemoryStore::new();
        let request = seeded(&store, "Alice").await;

        let updated = update(
            &store,
            &manager("Boss"),
            request.id,
            UpdateLeaveRequest::default(),
        )
        .await
        .unwrap();

        assert_eq!(updated, request);
    }

    #[tokio::test]
    async fn manager_cannot_null_status() {
        let store = MemoryStore::new();
        let request = seeded(&store, "Alice").await;

        let body = UpdateLeaveRequest {
            status: Patch::Null,
            ..Default::default()
        };
        let err = update(&store, &manager("Boss"), request.id, body)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn owner_null_date_is_rejected_before_any_write() {
        let store = MemoryStore::new();
        let request = seeded(&store, "Alice").await;

        let body = UpdateLeaveRequest {
            start: raw(at(2025, 9, 1, 0)),
            end: Patch::Null,
            ..Default::default()
        };
        let err = update(&store, &employee("Alice"), request.id, body)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(ref msg) if msg == "end cannot be cleared"));
        assert_eq!(
            store.find_leave_request(request.id).await.unwrap(),
            Some(request)
        );
    }

    #[tokio::test]
    async fn owner_unparseable_date_is_rejected() {
        let store = MemoryStore::new();
        let request = seeded(&store, "Alice").await;

        let body = UpdateLeaveRequest {
            start: raw("next week"),
            ..Default::default()
        };
        let err = update(&store, &employee("Alice"), request.id, body)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(ref msg) if msg.starts_with("invalid start")));
    }

    #[tokio::test]
    async fn ownership_is_checked_before_field_validation() {
        let store = MemoryStore::new();
        let request = seeded(&store, "Alice").await;

        let body = UpdateLeaveRequest {
            start: Patch::Null,
            ..Default::default()
        };
        let err = update(&store, &employee("Mallory"), request.id, body)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn out_of_policy_fields_are_ignored_whatever_their_value() {
        let store = MemoryStore::new();
        let request = seeded(&store, "Alice").await;

        let body = UpdateLeaveRequest {
            end: raw("2025-08-16"),
            status: raw("cancelled"),
            ..Default::default()
        };
        let moved = update(&store, &employee("Alice"), request.id, body)
            .await
            .unwrap();
        assert_eq!(moved.end, at(2025, 8, 16, 0));
        assert_eq!(moved.status, LeaveStatus::Pending);

        let body = UpdateLeaveRequest {
            start: raw("next week"),
            end: raw(42),
            status: raw(LeaveStatus::Approved),
        };
        let approved = update(&store, &manager("Boss"), request.id, body)
            .await
            .unwrap();
        assert_eq!(approved.status, LeaveStatus::Approved);
        assert_eq!(approved.start, request.start);
        assert_eq!(approved.end, at(2025, 8, 16, 0));
    }

    #[tokio::test]
    async fn manager_unknown_status_is_rejected() {
        let store = MemoryStore::new();
        let request = seeded(&store, "Alice").await;

        let body = UpdateLeaveRequest {
            status: raw("cancelled"),
            ..Default::default()
        };
        let err = update(&store, &manager("Boss"), request.id, body)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(ref msg) if msg.starts_with("invalid status")));
    }

    #[tokio::test]
    async fn unknown_id_is_not_found_for_any_role() {
        let store = MemoryStore::new();

        for caller in [employee("Alice"), manager("Boss")] {
            let err = update(&store, &caller, Uuid::new_v4(), UpdateLeaveRequest::default())
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::NotFound("Leave request not found")));
        }
    }

    #[tokio::test]
    async fn store_failures_become_internal_errors() {
        let store = FailingStore;

        let err = create(&store, Some(&employee("Alice")), august())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Internal { context: "Failed to create leave request.", .. }
        ));

        let err = list(&store).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Internal { context: "Failed to fetch leave requests", .. }
        ));

        let err = update(&store, &manager("Boss"), Uuid::new_v4(), UpdateLeaveRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Internal { context: "Failed to update leave request", .. }
        ));
    }
}
