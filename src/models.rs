use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Todo,
    Doing,
    Review,
    Done,
}

impl Status {
    pub const ALL: [Status; 4] = [Status::Todo, Status::Doing, Status::Review, Status::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::Doing => "doing",
            Status::Review => "review",
            Status::Done => "done",
        }
    }

    // Display labels follow the product language (pt-BR), same as the seed data
    pub fn label(&self) -> &'static str {
        match self {
            Status::Todo => "A fazer",
            Status::Doing => "Em andamento",
            Status::Review => "Em revisão",
            Status::Done => "Concluído",
        }
    }

    pub fn parse(input: &str) -> Option<Status> {
        match input.to_lowercase().as_str() {
            "todo" => Some(Status::Todo),
            "doing" => Some(Status::Doing),
            "review" => Some(Status::Review),
            "done" => Some(Status::Done),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Baixa",
            Priority::Medium => "Média",
            Priority::High => "Alta",
            Priority::Urgent => "Urgente",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Post,
    Story,
    Reels,
    Ad,
    Video,
    Blog,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Post => "post",
            ContentType::Story => "story",
            ContentType::Reels => "reels",
            ContentType::Ad => "ad",
            ContentType::Video => "video",
            ContentType::Blog => "blog",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub user: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub client_id: u32,
    pub status: Status,
    pub priority: Priority,
    pub content_type: ContentType,
    pub due_date: DateTime<Utc>,
    pub assigned_to: String,
    pub comments: Vec<Comment>,
    pub tag_ids: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: u32,
    pub name: String,
    pub industry: String,
    pub primary_color: String,
    pub secondary_color: String,
    pub posts_per_week: u32,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u32,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Scheduled,
    Draft,
    Pending,
}

impl EventStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Scheduled => "Agendado",
            EventStatus::Draft => "Rascunho",
            EventStatus::Pending => "Pendente",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: u32,
    pub title: String,
    pub client_id: u32,
    pub date: DateTime<Utc>,
    pub time: String,
    pub status: EventStatus,
    pub content_type: ContentType,
}

// Dashboard numbers are presentational mock data, like the rest of the seed
#[derive(Debug, Clone)]
pub struct DashboardStats {
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub in_progress_tasks: u32,
    pub pending_tasks: u32,
    pub tasks_this_week: u32,
    pub completion_rate: f64,
    pub clients_active: u32,
    pub top_performers: Vec<Performer>,
    pub tasks_by_type: Vec<TypeCount>,
    pub recent_activity: Vec<Activity>,
}

#[derive(Debug, Clone)]
pub struct Performer {
    pub name: String,
    pub tasks: u32,
    pub completion: u32,
}

#[derive(Debug, Clone)]
pub struct TypeCount {
    pub content_type: ContentType,
    pub count: u32,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    TaskCompleted,
    CommentAdded,
    TaskCreated,
    ClientAdded,
}

impl ActivityKind {
    pub fn verb(&self) -> &'static str {
        match self {
            ActivityKind::TaskCompleted => "finalizou",
            ActivityKind::CommentAdded => "comentou em",
            ActivityKind::TaskCreated => "criou",
            ActivityKind::ClientAdded => "adicionou cliente",
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            ActivityKind::TaskCompleted => "Concluído",
            ActivityKind::CommentAdded => "Comentário",
            ActivityKind::TaskCreated => "Nova tarefa",
            ActivityKind::ClientAdded => "Novo cliente",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Activity {
    pub kind: ActivityKind,
    pub subject: String,
    pub user: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct WeeklyPerformance {
    pub week: String,
    pub tasks: u64,
    pub completed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatKind {
    Clients,
    Projects,
    Groups,
    Direct,
}

impl ChatKind {
    pub const ALL: [ChatKind; 4] = [
        ChatKind::Clients,
        ChatKind::Projects,
        ChatKind::Groups,
        ChatKind::Direct,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ChatKind::Clients => "Clientes",
            ChatKind::Projects => "Projetos",
            ChatKind::Groups => "Grupos",
            ChatKind::Direct => "Diretas",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatChannel {
    pub id: u32,
    pub name: String,
    pub kind: ChatKind,
    pub unread_count: u32,
    pub is_muted: bool,
    pub last_message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ChatUser {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct Attachment {
    pub name: String,
    pub kind: String,
}

#[derive(Debug, Clone)]
pub struct Reaction {
    pub emoji: String,
    pub count: u32,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: u64,
    pub user_id: u32,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub attachments: Vec<Attachment>,
    pub reactions: Vec<Reaction>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PopupMode {
    None,
    NewColumn,
    BoardSearch,
    TaskSearch,
    ClientFilter,
    StatusFilter,
    ChatInput,
}
