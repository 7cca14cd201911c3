use chrono::{Duration, Utc};

use crate::board::Board;
use crate::models::{
    Activity, ActivityKind, Attachment, CalendarEvent, ChatChannel, ChatKind, ChatMessage,
    ChatUser, Client, Comment, ContentType, DashboardStats, EventStatus, Performer, Priority,
    Reaction, Status, Tag, Task, TypeCount, WeeklyPerformance,
};

// Static seed data for the whole dashboard. There is no backend: every view
// reads from this set, and the board mutates its own in-memory copy.

pub fn clients() -> Vec<Client> {
    vec![
        Client {
            id: 1,
            name: "Eco Solutions".to_string(),
            industry: "Sustentabilidade".to_string(),
            primary_color: "#4CAF50".to_string(),
            secondary_color: "#81C784".to_string(),
            posts_per_week: 3,
            tags: vec![
                "Verde".to_string(),
                "Ecológico".to_string(),
                "Inovação".to_string(),
            ],
        },
        Client {
            id: 2,
            name: "Tech Innovate".to_string(),
            industry: "Tecnologia".to_string(),
            primary_color: "#2196F3".to_string(),
            secondary_color: "#64B5F6".to_string(),
            posts_per_week: 5,
            tags: vec![
                "Tech".to_string(),
                "Digital".to_string(),
                "Futuro".to_string(),
            ],
        },
        Client {
            id: 3,
            name: "Beauty Spot".to_string(),
            industry: "Beleza".to_string(),
            primary_color: "#E91E63".to_string(),
            secondary_color: "#F48FB1".to_string(),
            posts_per_week: 4,
            tags: vec![
                "Beleza".to_string(),
                "Cuidados".to_string(),
                "Estilo".to_string(),
            ],
        },
        Client {
            id: 4,
            name: "Fit Life".to_string(),
            industry: "Fitness".to_string(),
            primary_color: "#FF9800".to_string(),
            secondary_color: "#FFB74D".to_string(),
            posts_per_week: 6,
            tags: vec![
                "Fitness".to_string(),
                "Saúde".to_string(),
                "Bem-estar".to_string(),
            ],
        },
    ]
}

pub fn tags() -> Vec<Tag> {
    vec![
        Tag { id: 1, name: "Urgente".to_string(), color: "#FF5252".to_string() },
        Tag { id: 2, name: "Revisão".to_string(), color: "#FFAB40".to_string() },
        Tag { id: 3, name: "Aprovado".to_string(), color: "#66BB6A".to_string() },
        Tag { id: 4, name: "Em espera".to_string(), color: "#42A5F5".to_string() },
        Tag { id: 5, name: "Feedback".to_string(), color: "#BA68C8".to_string() },
    ]
}

pub fn tasks() -> Vec<Task> {
    let now = Utc::now();
    vec![
        Task {
            id: 1,
            title: "Postagem sobre sustentabilidade".to_string(),
            description: "Criar post sobre práticas sustentáveis para empresas".to_string(),
            client_id: 1,
            status: Status::Doing,
            priority: Priority::Medium,
            content_type: ContentType::Post,
            due_date: now + Duration::days(2),
            assigned_to: "Ana Silva".to_string(),
            comments: vec![
                Comment {
                    user: "Carlos".to_string(),
                    message: "Podemos focar em economia de água?".to_string(),
                    timestamp: now,
                },
                Comment {
                    user: "Ana".to_string(),
                    message: "Boa ideia, vou incluir isso!".to_string(),
                    timestamp: now,
                },
            ],
            tag_ids: vec![4, 5],
        },
        Task {
            id: 2,
            title: "Vídeo explicativo sobre app".to_string(),
            description: "Produzir vídeo curto explicando as funcionalidades do novo aplicativo"
                .to_string(),
            client_id: 2,
            status: Status::Todo,
            priority: Priority::High,
            content_type: ContentType::Video,
            due_date: now + Duration::days(4),
            assigned_to: "Pedro Santos".to_string(),
            comments: Vec::new(),
            tag_ids: vec![1],
        },
        Task {
            id: 3,
            title: "Carrossel de produtos novos".to_string(),
            description: "Criar carrossel com os novos produtos da linha verão".to_string(),
            client_id: 3,
            status: Status::Review,
            priority: Priority::Medium,
            content_type: ContentType::Post,
            due_date: now + Duration::days(1),
            assigned_to: "Mariana Oliveira".to_string(),
            comments: vec![Comment {
                user: "Cliente".to_string(),
                message: "Adorei! Pode incluir mais o protetor solar?".to_string(),
                timestamp: now,
            }],
            tag_ids: vec![2],
        },
        Task {
            id: 4,
            title: "Campanha de desconto de verão".to_string(),
            description: "Criar artes para campanha de desconto da temporada".to_string(),
            client_id: 4,
            status: Status::Done,
            priority: Priority::Urgent,
            content_type: ContentType::Ad,
            due_date: now - Duration::days(1),
            assigned_to: "Bruno Costa".to_string(),
            comments: vec![Comment {
                user: "Gerente".to_string(),
                message: "Aprovado! Vamos veicular amanhã.".to_string(),
                timestamp: now,
            }],
            tag_ids: vec![3],
        },
        Task {
            id: 5,
            title: "Story sobre treinamento funcional".to_string(),
            description: "Criar stories explicando os benefícios do treinamento funcional"
                .to_string(),
            client_id: 4,
            status: Status::Todo,
            priority: Priority::Low,
            content_type: ContentType::Story,
            due_date: now + Duration::days(5),
            assigned_to: "Camila Rocha".to_string(),
            comments: Vec::new(),
            tag_ids: Vec::new(),
        },
        Task {
            id: 6,
            title: "Blog post sobre tendências tech".to_string(),
            description: "Escrever artigo sobre as tendências de tecnologia para 2024".to_string(),
            client_id: 2,
            status: Status::Doing,
            priority: Priority::Medium,
            content_type: ContentType::Blog,
            due_date: now + Duration::days(3),
            assigned_to: "Rafael Mendes".to_string(),
            comments: vec![Comment {
                user: "Editor".to_string(),
                message: "Podemos incluir IA como tópico principal?".to_string(),
                timestamp: now,
            }],
            tag_ids: vec![5],
        },
    ]
}

pub fn seed_board() -> Board {
    Board::new(tasks(), clients())
}

pub fn calendar_events() -> Vec<CalendarEvent> {
    let now = Utc::now();
    vec![
        CalendarEvent {
            id: 1,
            title: "Post Eco Solutions".to_string(),
            client_id: 1,
            date: now + Duration::days(1),
            time: "10:00".to_string(),
            status: EventStatus::Scheduled,
            content_type: ContentType::Post,
        },
        CalendarEvent {
            id: 2,
            title: "Story Tech Innovate".to_string(),
            client_id: 2,
            date: now + Duration::days(1),
            time: "15:00".to_string(),
            status: EventStatus::Draft,
            content_type: ContentType::Story,
        },
        CalendarEvent {
            id: 3,
            title: "Reels Beauty Spot".to_string(),
            client_id: 3,
            date: now + Duration::days(2),
            time: "12:30".to_string(),
            status: EventStatus::Scheduled,
            content_type: ContentType::Reels,
        },
        CalendarEvent {
            id: 4,
            title: "Post Fit Life".to_string(),
            client_id: 4,
            date: now + Duration::days(3),
            time: "09:00".to_string(),
            status: EventStatus::Pending,
            content_type: ContentType::Post,
        },
    ]
}

pub fn dashboard_stats() -> DashboardStats {
    let now = Utc::now();
    DashboardStats {
        total_tasks: 24,
        completed_tasks: 15,
        in_progress_tasks: 6,
        pending_tasks: 3,
        tasks_this_week: 8,
        completion_rate: 62.5,
        clients_active: 4,
        top_performers: vec![
            Performer { name: "Ana Silva".to_string(), tasks: 7, completion: 95 },
            Performer { name: "Pedro Santos".to_string(), tasks: 5, completion: 90 },
            Performer { name: "Mariana Oliveira".to_string(), tasks: 6, completion: 85 },
        ],
        tasks_by_type: vec![
            TypeCount { content_type: ContentType::Post, count: 12, color: "#4CAF50".to_string() },
            TypeCount { content_type: ContentType::Story, count: 5, color: "#2196F3".to_string() },
            TypeCount { content_type: ContentType::Video, count: 3, color: "#9C27B0".to_string() },
            TypeCount { content_type: ContentType::Ad, count: 4, color: "#FF9800".to_string() },
        ],
        recent_activity: vec![
            Activity {
                kind: ActivityKind::TaskCompleted,
                subject: "Campanha de desconto de verão".to_string(),
                user: "Bruno Costa".to_string(),
                timestamp: now - Duration::hours(2),
            },
            Activity {
                kind: ActivityKind::CommentAdded,
                subject: "Postagem sobre sustentabilidade".to_string(),
                user: "Ana Silva".to_string(),
                timestamp: now - Duration::hours(5),
            },
            Activity {
                kind: ActivityKind::TaskCreated,
                subject: "Blog post sobre tendências tech".to_string(),
                user: "Rafael Mendes".to_string(),
                timestamp: now - Duration::hours(8),
            },
            Activity {
                kind: ActivityKind::ClientAdded,
                subject: "Beauty Spot".to_string(),
                user: "Coordenador".to_string(),
                timestamp: now - Duration::hours(24),
            },
        ],
    }
}

pub fn weekly_performance() -> Vec<WeeklyPerformance> {
    vec![
        WeeklyPerformance { week: "Semana 1".to_string(), tasks: 12, completed: 10 },
        WeeklyPerformance { week: "Semana 2".to_string(), tasks: 15, completed: 13 },
        WeeklyPerformance { week: "Semana 3".to_string(), tasks: 10, completed: 8 },
        WeeklyPerformance { week: "Semana 4".to_string(), tasks: 18, completed: 15 },
    ]
}

pub fn chat_channels() -> Vec<ChatChannel> {
    vec![
        ChatChannel {
            id: 1,
            name: "Marca X".to_string(),
            kind: ChatKind::Clients,
            unread_count: 5,
            is_muted: false,
            last_message: Some("Novo briefing disponível".to_string()),
        },
        ChatChannel {
            id: 2,
            name: "Marca Y".to_string(),
            kind: ChatKind::Clients,
            unread_count: 0,
            is_muted: true,
            last_message: Some("Aprovado o layout".to_string()),
        },
        ChatChannel {
            id: 3,
            name: "Campanha Verão".to_string(),
            kind: ChatKind::Projects,
            unread_count: 2,
            is_muted: false,
            last_message: Some("Reunião amanhã às 10h".to_string()),
        },
        ChatChannel {
            id: 4,
            name: "Lançamento Produto".to_string(),
            kind: ChatKind::Projects,
            unread_count: 0,
            is_muted: false,
            last_message: Some("Materiais atualizados".to_string()),
        },
        ChatChannel {
            id: 5,
            name: "Time de Design".to_string(),
            kind: ChatKind::Groups,
            unread_count: 8,
            is_muted: false,
            last_message: Some("Nova paleta enviada".to_string()),
        },
        ChatChannel {
            id: 6,
            name: "Marketing".to_string(),
            kind: ChatKind::Groups,
            unread_count: 0,
            is_muted: true,
            last_message: Some("Vamos revisar o cronograma".to_string()),
        },
        ChatChannel {
            id: 7,
            name: "João Silva".to_string(),
            kind: ChatKind::Direct,
            unread_count: 3,
            is_muted: false,
            last_message: Some("Você viu o feedback?".to_string()),
        },
        ChatChannel {
            id: 8,
            name: "Ana Oliveira".to_string(),
            kind: ChatKind::Direct,
            unread_count: 0,
            is_muted: false,
            last_message: Some("Enviando as referências".to_string()),
        },
    ]
}

pub fn chat_users() -> Vec<ChatUser> {
    vec![
        ChatUser { id: 1, name: "Carlos Mendes".to_string() },
        ChatUser { id: 2, name: "João Silva".to_string() },
        ChatUser { id: 3, name: "Ana Oliveira".to_string() },
    ]
}

pub fn chat_messages() -> Vec<ChatMessage> {
    let now = Utc::now();
    vec![
        ChatMessage {
            id: 1,
            user_id: 1,
            content: "Pessoal, estou enviando o briefing atualizado da campanha".to_string(),
            timestamp: now - Duration::hours(3),
            attachments: vec![Attachment {
                name: "briefing-campanha.pdf".to_string(),
                kind: "pdf".to_string(),
            }],
            reactions: Vec::new(),
        },
        ChatMessage {
            id: 2,
            user_id: 2,
            content: "Obrigado! Já estou analisando e retorno com dúvidas.".to_string(),
            timestamp: now - Duration::minutes(165),
            attachments: Vec::new(),
            reactions: vec![Reaction { emoji: "👍".to_string(), count: 2 }],
        },
        ChatMessage {
            id: 3,
            user_id: 3,
            content: "Temos alguma referência visual para seguir?".to_string(),
            timestamp: now - Duration::minutes(135),
            attachments: Vec::new(),
            reactions: Vec::new(),
        },
        ChatMessage {
            id: 4,
            user_id: 1,
            content: "Sim, estou enviando algumas referências que o cliente gostou".to_string(),
            timestamp: now - Duration::minutes(120),
            attachments: vec![
                Attachment { name: "referencia1.jpg".to_string(), kind: "image".to_string() },
                Attachment { name: "referencia2.jpg".to_string(), kind: "image".to_string() },
            ],
            reactions: Vec::new(),
        },
        ChatMessage {
            id: 5,
            user_id: 2,
            content: "Precisamos definir a paleta de cores até amanhã. @Ana você pode ajudar com isso?"
                .to_string(),
            timestamp: now - Duration::minutes(90),
            attachments: Vec::new(),
            reactions: vec![Reaction { emoji: "✅".to_string(), count: 1 }],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_ids_are_unique() {
        let tasks = tasks();
        let mut ids: Vec<u64> = tasks.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), tasks.len());
    }

    #[test]
    fn every_task_references_a_seeded_client() {
        let clients = clients();
        for task in tasks() {
            assert!(
                clients.iter().any(|c| c.id == task.client_id),
                "task {} points at missing client {}",
                task.id,
                task.client_id
            );
        }
    }

    #[test]
    fn every_task_tag_exists() {
        let tags = tags();
        for task in tasks() {
            for tag_id in &task.tag_ids {
                assert!(tags.iter().any(|t| t.id == *tag_id));
            }
        }
    }

    #[test]
    fn every_event_references_a_seeded_client() {
        let clients = clients();
        for event in calendar_events() {
            assert!(clients.iter().any(|c| c.id == event.client_id));
        }
    }

    #[test]
    fn every_chat_message_has_a_known_author() {
        let users = chat_users();
        for message in chat_messages() {
            assert!(users.iter().any(|u| u.id == message.user_id));
        }
    }
}
