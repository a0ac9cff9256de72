//! Domain entity representing a personal to-do item.

/// A to-do item owned by exactly one identity.
///
/// `id` and `owner_id` are fixed at creation. `owner_id` always comes from the
/// authenticated caller, never from request input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub priority: i32,
    pub complete: bool,
    pub owner_id: i64,
}

impl Todo {
    /// Creates a new Todo instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let todo = Todo::new(
    ///     1,
    ///     "Learn coding!".to_string(),
    ///     "Need to practice everyday!".to_string(),
    ///     5,
    ///     false,
    ///     1,
    /// );
    /// ```
    pub fn new(
        id: i64,
        title: String,
        description: String,
        priority: i32,
        complete: bool,
        owner_id: i64,
    ) -> Self {
        Self {
            id,
            title,
            description,
            priority,
            complete,
            owner_id,
        }
    }
}

/// Input data for creating a new to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub priority: i32,
    pub complete: bool,
    pub owner_id: i64,
}

/// Input data for updating an existing to-do item.
///
/// All fields are optional to support partial updates. Use `None` to leave
/// a field unchanged. There is deliberately no way to change the owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i32>,
    pub complete: Option<bool>,
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.complete.is_none()
    }
}
