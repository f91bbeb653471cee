//! Seed data every fresh session starts from.
//!
//! Nothing is persisted, so each new `Workspace` begins with exactly these
//! records, newest first.

use crate::model::journal::JournalEntry;
use crate::model::learning::LearningTopic;
use crate::model::project::{Project, ProjectStatus};
use crate::model::snippet::Snippet;
use crate::model::EntityId;
use crate::session::User;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub fn user() -> User {
    User {
        id: "user-1".to_string(),
        name: "Lito Galan".to_string(),
        email: "lito.galan@example.com".to_string(),
        avatar_url: "https://picsum.photos/seed/user1/100/100".to_string(),
    }
}

pub fn snippets() -> Vec<Snippet> {
    vec![
        Snippet {
            id: EntityId::new("snippet-1"),
            title: "React Custom Hook: useDebounce".to_string(),
            description: "A custom hook to debounce any fast-changing value.".to_string(),
            code: r#"import { useState, useEffect } from 'react';

function useDebounce<T>(value: T, delay: number): T {
  const [debouncedValue, setDebouncedValue] = useState<T>(value);

  useEffect(() => {
    const handler = setTimeout(() => {
      setDebouncedValue(value);
    }, delay);

    return () => {
      clearTimeout(handler);
    };
  }, [value, delay]);

  return debouncedValue;
}

export default useDebounce;"#
                .to_string(),
            language: "typescript".to_string(),
            tags: strings(&["react", "hook", "debounce", "typescript"]),
            // 2023-10-26T10:00:00Z
            created_at: 1_698_314_400_000,
        },
        Snippet {
            id: EntityId::new("snippet-2"),
            title: "Python Flask Minimal App".to_string(),
            description:
                "A barebones \"Hello, World!\" application using the Flask framework in Python."
                    .to_string(),
            code: r#"from flask import Flask

app = Flask(__name__)

@app.route('/')
def hello_world():
    return 'Hello, World!'

if __name__ == '__main__':
    app.run(debug=True)"#
                .to_string(),
            language: "python".to_string(),
            tags: strings(&["python", "flask", "backend", "api"]),
            // 2023-10-25T14:30:00Z
            created_at: 1_698_244_200_000,
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: EntityId::new("project-1"),
            title: "Personal Developer Hub".to_string(),
            description:
                "The very application you are using now. An all-in-one platform for developers."
                    .to_string(),
            tech_stack: strings(&["React", "TypeScript", "TailwindCSS", "Vite"]),
            repo_link: Some("https://github.com/example/dev-hub".to_string()),
            live_link: Some("https://dev-hub.example.com".to_string()),
            status: ProjectStatus::InProgress,
            progress: 75,
        },
        Project {
            id: EntityId::new("project-2"),
            title: "E-commerce Backend API".to_string(),
            description:
                "A robust REST API for an e-commerce platform built with Node.js and Express."
                    .to_string(),
            tech_stack: strings(&["Node.js", "Express", "MongoDB", "JWT"]),
            repo_link: Some("https://github.com/example/ecommerce-api".to_string()),
            live_link: None,
            status: ProjectStatus::Completed,
            progress: 100,
        },
        Project {
            id: EntityId::new("project-3"),
            title: "Mobile Weather App".to_string(),
            description:
                "A simple and clean weather application for iOS and Android using React Native."
                    .to_string(),
            tech_stack: strings(&["React Native", "Expo", "OpenWeatherMap API"]),
            repo_link: None,
            live_link: None,
            status: ProjectStatus::Planning,
            progress: 10,
        },
    ]
}

pub fn learning_topics() -> Vec<LearningTopic> {
    vec![
        LearningTopic {
            id: EntityId::new("learn-1"),
            topic_name: "Advanced TypeScript".to_string(),
            category: "Frontend".to_string(),
            progress: 60,
            notes: "### Topics to cover:\n- Generics\n- Conditional Types\n- Mapped Types\n- Decorators"
                .to_string(),
        },
        LearningTopic {
            id: EntityId::new("learn-2"),
            topic_name: "GraphQL Fundamentals".to_string(),
            category: "Backend".to_string(),
            progress: 85,
            notes: "Finished the main course. Need to build a project with Apollo Server and Client."
                .to_string(),
        },
        LearningTopic {
            id: EntityId::new("learn-3"),
            topic_name: "Docker & Containerization".to_string(),
            category: "DevOps".to_string(),
            progress: 30,
            notes: "Just started learning about Dockerfiles and docker-compose. It seems powerful!"
                .to_string(),
        },
    ]
}

pub fn journal_entries() -> Vec<JournalEntry> {
    vec![
        JournalEntry {
            id: EntityId::new("journal-1"),
            title: "Solved a tricky CSS bug".to_string(),
            content: "Today I spent a few hours debugging a layout issue with flexbox. It turned \
                      out to be a `min-width: 0` problem on a flex child. It's a good reminder to \
                      always check the browser dev tools carefully."
                .to_string(),
            // 2023-10-26T18:00:00Z
            date: 1_698_343_200_000,
            tags: strings(&["css", "debugging", "frontend"]),
        },
        JournalEntry {
            id: EntityId::new("journal-2"),
            title: "Learned about database indexing".to_string(),
            content: "Dived into how database indexing works in MongoDB. It can dramatically \
                      improve query performance. I need to apply this to my e-commerce API \
                      project."
                .to_string(),
            // 2023-10-25T20:15:00Z
            date: 1_698_264_900_000,
            tags: strings(&["database", "mongodb", "performance"]),
        },
    ]
}
