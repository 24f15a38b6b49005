use super::actions::Action;
use crate::api::{ApiError, LoginArgs, ProductId, ProductInput, RegisterArgs};
use crate::constants::{
    ERROR_DASHBOARD_LOAD_FAILED, ERROR_LOGIN_FAILED, ERROR_PRODUCTS_LOAD_FAILED, ERROR_PRODUCT_CREATE_FAILED,
    ERROR_PRODUCT_DELETE_FAILED, ERROR_PRODUCT_LOAD_FAILED, ERROR_PRODUCT_UPDATE_FAILED, ERROR_REGISTER_FAILED,
};
use crate::paging::ListQuery;
use crate::service::InventoryService;
use std::collections::HashMap;
use std::future::Future;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

impl BackgroundTask {
    pub fn elapsed(&self) -> std::time::Duration {
        self.started_at.elapsed()
    }
}

/// Turn a failed call into the action the UI should see.
///
/// A rejected or missing session always becomes [`Action::SessionExpired`]; server-side
/// validation messages are shown as-is, everything else is prefixed with `context`.
pub fn failure_action(error: ApiError, context: &str, make: impl FnOnce(String) -> Action) -> Action {
    match error {
        ApiError::Unauthorized | ApiError::NotAuthenticated => Action::SessionExpired,
        ApiError::Validation { .. } | ApiError::Rejected(_) => make(error.user_message()),
        other => make(format!("{}: {}", context, other.user_message())),
    }
}

/// Spawns service calls on the tokio runtime and reports their outcome as [`Action`]s
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Run `operation` in the background and send the action it resolves to
    pub fn spawn<Fut>(&mut self, description: impl Into<String>, operation: Fut) -> TaskId
    where
        Fut: Future<Output = Action> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            let action = operation.await;
            // The receiver is gone only while shutting down
            let _ = action_sender.send(action);
        });

        let description = description.into();
        log::debug!("Spawned background task {} '{}'", task_id, description);

        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                description,
                started_at: std::time::Instant::now(),
            },
        );
        task_id
    }

    pub fn spawn_login(&mut self, service: InventoryService, args: LoginArgs) -> TaskId {
        self.spawn("Login", async move {
            match service.login(args).await {
                Ok(session) => Action::LoggedIn(session),
                Err(ApiError::Unauthorized) => Action::AuthFailed(ERROR_LOGIN_FAILED.to_string()),
                Err(e) => failure_action(e, ERROR_LOGIN_FAILED, Action::AuthFailed),
            }
        })
    }

    pub fn spawn_register(&mut self, service: InventoryService, args: RegisterArgs) -> TaskId {
        self.spawn("Register", async move {
            match service.register(args).await {
                Ok(session) => Action::LoggedIn(session),
                Err(ApiError::Unauthorized) => Action::AuthFailed(ERROR_REGISTER_FAILED.to_string()),
                Err(e) => failure_action(e, ERROR_REGISTER_FAILED, Action::AuthFailed),
            }
        })
    }

    pub fn spawn_logout(&mut self, service: InventoryService) -> TaskId {
        self.spawn("Logout", async move {
            service.logout().await;
            Action::LoggedOut
        })
    }

    pub fn spawn_products_load(&mut self, service: InventoryService, request_id: u64, query: ListQuery) -> TaskId {
        let description = format!("Load products #{} (page {})", request_id, query.page);
        self.spawn(description, async move {
            match service.list_products(&query).await {
                Ok(page) => Action::ProductsLoaded { request_id, page },
                Err(e) => failure_action(e, ERROR_PRODUCTS_LOAD_FAILED, |message| Action::ProductsLoadFailed {
                    request_id,
                    message,
                }),
            }
        })
    }

    pub fn spawn_product_load(&mut self, service: InventoryService, id: ProductId) -> TaskId {
        self.spawn(format!("Load product {}", id), async move {
            match service.get_product(id).await {
                Ok(product) => Action::ProductLoaded(product),
                Err(e) => failure_action(e, ERROR_PRODUCT_LOAD_FAILED, Action::ProductLoadFailed),
            }
        })
    }

    pub fn spawn_product_save(
        &mut self,
        service: InventoryService,
        id: Option<ProductId>,
        input: ProductInput,
    ) -> TaskId {
        let description = match id {
            Some(id) => format!("Update product {}", id),
            None => format!("Create product '{}'", input.name),
        };
        self.spawn(description, async move {
            let (result, context) = match id {
                Some(id) => (service.update_product(id, input).await, ERROR_PRODUCT_UPDATE_FAILED),
                None => (service.create_product(input).await, ERROR_PRODUCT_CREATE_FAILED),
            };
            match result {
                Ok(_) => Action::ProductSaved { created: id.is_none() },
                Err(e) => failure_action(e, context, Action::ProductSaveFailed),
            }
        })
    }

    pub fn spawn_product_delete(&mut self, service: InventoryService, id: ProductId) -> TaskId {
        self.spawn(format!("Delete product {}", id), async move {
            match service.delete_product(id).await {
                Ok(()) => Action::ProductDeleted(id),
                Err(e) => failure_action(e, ERROR_PRODUCT_DELETE_FAILED, Action::ProductDeleteFailed),
            }
        })
    }

    pub fn spawn_dashboard_load(&mut self, service: InventoryService) -> TaskId {
        self.spawn("Load dashboard", async move {
            match service.dashboard_summary().await {
                Ok(summary) => Action::DashboardLoaded(summary),
                Err(e) => failure_action(e, ERROR_DASHBOARD_LOAD_FAILED, Action::DashboardFailed),
            }
        })
    }

    /// Forget finished tasks and return their ids
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            if let Some(task) = self.tasks.remove(task_id) {
                log::debug!(
                    "Background task {} '{}' finished after {:?}",
                    task.id,
                    task.description,
                    task.elapsed()
                );
            }
        }

        finished
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
