use serde::{Deserialize, Serialize};

use crate::models::{Client, Status, Task};

pub const DEFAULT_COLUMN_COLOR: &str = "#6B7280";

/// Lane identity. Canonical lanes mirror the task lifecycle; custom lanes
/// are user-created buckets that never touch a task's status field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaneId {
    Status(Status),
    Custom(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub lane: LaneId,
    pub title: String,
    // Order is meaningful: this is the on-screen vertical position
    pub task_ids: Vec<u64>,
    pub color: String,
}

/// A completed relocation gesture. `dest` is `None` when the gesture was
/// cancelled (card dropped outside every lane).
#[derive(Debug, Clone, PartialEq)]
pub struct MoveRequest {
    pub task_id: u64,
    pub source: LaneId,
    pub source_index: usize,
    pub dest: Option<(LaneId, usize)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardCommand {
    Move(MoveRequest),
    AddColumn { title: String },
}

#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub client_id: Option<u32>,
    pub status: Option<Status>,
    pub query: String,
}

impl TaskFilter {
    pub fn is_active(&self) -> bool {
        self.client_id.is_some() || self.status.is_some() || !self.query.trim().is_empty()
    }

    pub fn matches(&self, task: &Task, clients: &[Client]) -> bool {
        if let Some(client_id) = self.client_id {
            if task.client_id != client_id {
                return false;
            }
        }
        if let Some(status) = self.status {
            if task.status != status {
                return false;
            }
        }
        let query = self.query.trim().to_lowercase();
        if !query.is_empty() {
            let client_name = clients
                .iter()
                .find(|c| c.id == task.client_id)
                .map(|c| c.name.to_lowercase())
                .unwrap_or_default();
            if !task.title.to_lowercase().contains(&query) && !client_name.contains(&query) {
                return false;
            }
        }
        true
    }
}

/// Owns the task collection, the ordered lanes and the read-only client
/// set. Every mutation goes through `apply`; the views only read snapshots.
#[derive(Debug, Clone)]
pub struct Board {
    tasks: Vec<Task>,
    columns: Vec<Column>,
    clients: Vec<Client>,
    next_column_seq: u64,
}

fn status_column_color(status: Status) -> &'static str {
    match status {
        Status::Todo => "#6B7280",
        Status::Doing => "#3B82F6",
        Status::Review => "#F59E0B",
        Status::Done => "#10B981",
    }
}

impl Board {
    pub fn new(tasks: Vec<Task>, clients: Vec<Client>) -> Self {
        // One lane per canonical status, seeded in task order
        let columns = Status::ALL
            .iter()
            .map(|&status| Column {
                lane: LaneId::Status(status),
                title: status.label().to_string(),
                task_ids: tasks
                    .iter()
                    .filter(|t| t.status == status)
                    .map(|t| t.id)
                    .collect(),
                color: status_column_color(status).to_string(),
            })
            .collect();

        Board {
            tasks,
            columns,
            clients,
            next_column_seq: 0,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn task(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn client(&self, id: u32) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    pub fn column(&self, lane: &LaneId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.lane == lane)
    }

    pub fn column_by_title(&self, title: &str) -> Option<&Column> {
        let title = title.to_lowercase();
        self.columns.iter().find(|c| c.title.to_lowercase() == title)
    }

    /// The lane currently holding a task, if any.
    pub fn lane_of(&self, task_id: u64) -> Option<&LaneId> {
        self.columns
            .iter()
            .find(|c| c.task_ids.contains(&task_id))
            .map(|c| &c.lane)
    }

    /// Single mutation entry point. Returns whether anything changed.
    pub fn apply(&mut self, command: BoardCommand) -> bool {
        match command {
            BoardCommand::Move(request) => self.apply_move(request),
            BoardCommand::AddColumn { title } => self.add_column(&title).is_some(),
        }
    }

    /// Relocate a card. Cancelled gestures, identity moves, unknown lanes
    /// and stale source positions are all silent no-ops.
    pub fn apply_move(&mut self, request: MoveRequest) -> bool {
        let Some((dest_lane, dest_index)) = request.dest else {
            log::debug!("move of task {} cancelled, no drop target", request.task_id);
            return false;
        };
        if dest_lane == request.source && dest_index == request.source_index {
            return false;
        }
        let Some(source_pos) = self.columns.iter().position(|c| c.lane == request.source) else {
            log::debug!("move rejected: unknown source lane {:?}", request.source);
            return false;
        };
        let Some(dest_pos) = self.columns.iter().position(|c| c.lane == dest_lane) else {
            log::debug!("move rejected: unknown destination lane {:?}", dest_lane);
            return false;
        };
        if self.columns[source_pos].task_ids.get(request.source_index) != Some(&request.task_id) {
            log::debug!(
                "move rejected: task {} not at {:?}[{}]",
                request.task_id,
                request.source,
                request.source_index
            );
            return false;
        }

        self.columns[source_pos].task_ids.remove(request.source_index);
        let dest_column = &mut self.columns[dest_pos];
        let at = dest_index.min(dest_column.task_ids.len());
        dest_column.task_ids.insert(at, request.task_id);

        // Only canonical lanes rewrite the lifecycle status; custom lanes
        // leave it untouched.
        if let LaneId::Status(status) = dest_lane {
            if let Some(task) = self.tasks.iter_mut().find(|t| t.id == request.task_id) {
                task.status = status;
            }
        }

        log::debug!(
            "task {} moved {:?}[{}] -> {:?}[{}]",
            request.task_id,
            request.source,
            request.source_index,
            self.columns[dest_pos].lane,
            at
        );
        true
    }

    /// Append a user-created lane. Whitespace-only titles are ignored;
    /// duplicate titles are allowed.
    pub fn add_column(&mut self, title: &str) -> Option<&Column> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        self.next_column_seq += 1;
        self.columns.push(Column {
            lane: LaneId::Custom(format!("column-{}", self.next_column_seq)),
            title: title.to_string(),
            task_ids: Vec::new(),
            color: DEFAULT_COLUMN_COLOR.to_string(),
        });
        log::debug!("column '{}' added", title);
        self.columns.last()
    }

    /// Pure projection: all filter axes AND-composed, task order preserved.
    pub fn filtered_tasks(&self, filter: &TaskFilter) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| filter.matches(t, &self.clients))
            .collect()
    }

    pub fn tasks_by_status(&self, status: Status) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == status).collect()
    }

    pub fn tasks_by_client(&self, client_id: u32) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.client_id == client_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn board() -> Board {
        Board::new(data::tasks(), data::clients())
    }

    fn ids(board: &Board, lane: &LaneId) -> Vec<u64> {
        board.column(lane).map(|c| c.task_ids.clone()).unwrap_or_default()
    }

    fn move_request(
        task_id: u64,
        source: LaneId,
        source_index: usize,
        dest: LaneId,
        dest_index: usize,
    ) -> MoveRequest {
        MoveRequest {
            task_id,
            source,
            source_index,
            dest: Some((dest, dest_index)),
        }
    }

    #[test]
    fn seed_columns_partition_tasks() {
        let board = board();
        let mut seen = Vec::new();
        for column in board.columns() {
            for &id in &column.task_ids {
                assert!(!seen.contains(&id), "task {} in more than one lane", id);
                seen.push(id);
                // lane and status agree at seed time
                if let LaneId::Status(status) = column.lane {
                    assert_eq!(board.task(id).map(|t| t.status), Some(status));
                }
            }
        }
        assert_eq!(seen.len(), board.tasks().len());
    }

    #[test]
    fn cross_lane_move_updates_sequences_and_status() {
        // Task 2 "Vídeo explicativo sobre app" sits at todo[0]
        let mut board = board();
        let todo = LaneId::Status(Status::Todo);
        let doing = LaneId::Status(Status::Doing);
        let doing_before = ids(&board, &doing);
        assert_eq!(ids(&board, &todo)[0], 2);

        let changed = board.apply(BoardCommand::Move(move_request(
            2,
            todo.clone(),
            0,
            doing.clone(),
            0,
        )));
        assert!(changed);

        let todo_after = ids(&board, &todo);
        let doing_after = ids(&board, &doing);
        assert!(!todo_after.contains(&2));
        assert_eq!(doing_after[0], 2);
        assert_eq!(doing_after[1..], doing_before[..]);
        assert_eq!(doing_after.iter().filter(|&&id| id == 2).count(), 1);
        assert_eq!(board.task(2).map(|t| t.status), Some(Status::Doing));
        assert_eq!(board.lane_of(2), Some(&doing));
    }

    #[test]
    fn move_to_middle_of_destination() {
        let mut board = board();
        let todo = LaneId::Status(Status::Todo);
        let doing = LaneId::Status(Status::Doing);
        // doing seeds as [1, 6]; insert between them
        let changed = board.apply_move(move_request(5, todo.clone(), 1, doing.clone(), 1));
        assert!(changed);
        assert_eq!(ids(&board, &doing), vec![1, 5, 6]);
    }

    #[test]
    fn same_lane_reorder_keeps_membership() {
        let mut board = board();
        let doing = LaneId::Status(Status::Doing);
        // doing seeds as [1, 6]
        let changed = board.apply_move(move_request(1, doing.clone(), 0, doing.clone(), 1));
        assert!(changed);
        assert_eq!(ids(&board, &doing), vec![6, 1]);
        assert_eq!(board.task(1).map(|t| t.status), Some(Status::Doing));
    }

    #[test]
    fn cancelled_gesture_is_a_noop() {
        let mut board = board();
        let before = board.clone();
        let changed = board.apply_move(MoveRequest {
            task_id: 2,
            source: LaneId::Status(Status::Todo),
            source_index: 0,
            dest: None,
        });
        assert!(!changed);
        assert_eq!(board.columns(), before.columns());
        assert_eq!(board.tasks(), before.tasks());
    }

    #[test]
    fn identity_move_is_a_noop() {
        let mut board = board();
        let before = board.clone();
        let todo = LaneId::Status(Status::Todo);
        let changed = board.apply_move(move_request(2, todo.clone(), 0, todo, 0));
        assert!(!changed);
        assert_eq!(board.columns(), before.columns());
        assert_eq!(board.tasks(), before.tasks());
    }

    #[test]
    fn unknown_lanes_are_noops() {
        let mut board = board();
        let before = board.clone();
        let ghost = LaneId::Custom("column-99".to_string());

        assert!(!board.apply_move(move_request(
            2,
            ghost.clone(),
            0,
            LaneId::Status(Status::Doing),
            0
        )));
        assert!(!board.apply_move(move_request(2, LaneId::Status(Status::Todo), 0, ghost, 0)));
        assert_eq!(board.columns(), before.columns());
    }

    #[test]
    fn stale_source_index_is_a_noop() {
        let mut board = board();
        let before = board.clone();
        let todo = LaneId::Status(Status::Todo);
        // task 2 is at todo[0], not todo[1]
        let changed = board.apply_move(move_request(2, todo, 1, LaneId::Status(Status::Done), 0));
        assert!(!changed);
        assert_eq!(board.columns(), before.columns());
    }

    #[test]
    fn move_into_custom_lane_preserves_status() {
        let mut board = board();
        board.add_column("Backlog do cliente");
        let custom = board.columns().last().map(|c| c.lane.clone()).unwrap();
        let todo = LaneId::Status(Status::Todo);

        let changed = board.apply_move(move_request(2, todo.clone(), 0, custom.clone(), 0));
        assert!(changed);
        assert_eq!(ids(&board, &custom), vec![2]);
        assert!(!ids(&board, &todo).contains(&2));
        // status untouched by custom lanes
        assert_eq!(board.task(2).map(|t| t.status), Some(Status::Todo));
    }

    #[test]
    fn move_back_out_of_custom_lane() {
        let mut board = board();
        board.add_column("Espera");
        let custom = board.columns().last().map(|c| c.lane.clone()).unwrap();
        let done = LaneId::Status(Status::Done);

        board.apply_move(move_request(2, LaneId::Status(Status::Todo), 0, custom.clone(), 0));
        let changed = board.apply_move(move_request(2, custom, 0, done.clone(), 0));
        assert!(changed);
        assert_eq!(board.task(2).map(|t| t.status), Some(Status::Done));
        assert_eq!(ids(&board, &done)[0], 2);
    }

    #[test]
    fn dest_index_is_clamped_to_sequence_end() {
        let mut board = board();
        let todo = LaneId::Status(Status::Todo);
        let doing = LaneId::Status(Status::Doing);
        let changed = board.apply_move(move_request(2, todo, 0, doing.clone(), 99));
        assert!(changed);
        assert_eq!(ids(&board, &doing).last(), Some(&2));
    }

    #[test]
    fn add_column_rejects_blank_titles() {
        let mut board = board();
        let before = board.columns().len();
        assert!(board.add_column("").is_none());
        assert!(board.add_column("   ").is_none());
        assert_eq!(board.columns().len(), before);
    }

    #[test]
    fn add_column_appends_empty_lane() {
        let mut board = board();
        let before = board.columns().len();
        let changed = board.apply(BoardCommand::AddColumn {
            title: "Launch".to_string(),
        });
        assert!(changed);
        assert_eq!(board.columns().len(), before + 1);
        let column = board.columns().last().unwrap();
        assert_eq!(column.title, "Launch");
        assert!(column.task_ids.is_empty());
        assert_eq!(column.color, DEFAULT_COLUMN_COLOR);
    }

    #[test]
    fn add_column_allows_duplicate_titles_with_unique_lanes() {
        let mut board = board();
        board.add_column("Launch");
        board.add_column("Launch");
        let lanes: Vec<_> = board
            .columns()
            .iter()
            .filter(|c| c.title == "Launch")
            .map(|c| c.lane.clone())
            .collect();
        assert_eq!(lanes.len(), 2);
        assert_ne!(lanes[0], lanes[1]);
    }

    #[test]
    fn client_filter_preserves_relative_order() {
        let board = board();
        let filter = TaskFilter {
            client_id: Some(4),
            ..Default::default()
        };
        let tasks: Vec<u64> = board.filtered_tasks(&filter).iter().map(|t| t.id).collect();
        // Fit Life owns tasks 4 and 5, in seed order
        assert_eq!(tasks, vec![4, 5]);
    }

    #[test]
    fn query_matches_title_or_client_name() {
        let board = board();
        let by_title = TaskFilter {
            query: "vídeo explicativo".to_string(),
            ..Default::default()
        };
        assert_eq!(board.filtered_tasks(&by_title).len(), 1);

        let by_client = TaskFilter {
            query: "tech innovate".to_string(),
            ..Default::default()
        };
        let tasks: Vec<u64> = board
            .filtered_tasks(&by_client)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(tasks, vec![2, 6]);
    }

    #[test]
    fn filter_axes_compose_with_and() {
        let board = board();
        let filter = TaskFilter {
            client_id: Some(2),
            status: Some(Status::Todo),
            query: "app".to_string(),
        };
        let tasks: Vec<u64> = board.filtered_tasks(&filter).iter().map(|t| t.id).collect();
        assert_eq!(tasks, vec![2]);

        let contradictory = TaskFilter {
            client_id: Some(1),
            status: Some(Status::Todo),
            query: String::new(),
        };
        assert!(board.filtered_tasks(&contradictory).is_empty());
    }

    #[test]
    fn filter_is_read_only() {
        let board = board();
        let before = board.clone();
        let filter = TaskFilter {
            client_id: Some(1),
            status: Some(Status::Doing),
            query: "sustentabilidade".to_string(),
        };
        let _ = board.filtered_tasks(&filter);
        assert_eq!(board.columns(), before.columns());
        assert_eq!(board.tasks(), before.tasks());
    }
}
