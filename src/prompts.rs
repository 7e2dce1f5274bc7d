//! Prompt builders, one per chart type.
//!
//! The wording here steers the model toward output the extractors recover
//! well (simple single-letter node ids, one edge per line, fenced Mermaid),
//! but nothing downstream depends on the model honoring it.

use crate::chart::ChartType;

pub fn prompt_for(chart: ChartType, input: &str) -> String {
    match chart {
        ChartType::Flowchart => flowchart(input),
        ChartType::Mindmap => mindmap(input),
        ChartType::Gantt => gantt(input),
        ChartType::Pie => pie(input),
        ChartType::Quadrant => quadrant(input),
        ChartType::Journey => journey(input),
        ChartType::Git => git(input),
        ChartType::State => state(input),
        ChartType::Class => class(input),
        ChartType::Timeline => timeline(input),
        ChartType::Sequence => sequence(input),
    }
}

pub fn flowchart(input: &str) -> String {
    format!(
        r#"Create a Mermaid flowchart for this process, workflow, or code: "{input}"

STANDARD FLOWCHART SYMBOLS (use these exactly):
- Rectangle (Process): B[Process step]
- Pill (Start/End): A([Start]) F([End])
- Diamond (Decision): C{{Question?}}
- Parallelogram (Input/Output): D[/Input data/] E[/Output result/]

SYNTAX REQUIREMENTS:
1. Start with: flowchart TD
2. Each arrow connection on its own line
3. Use simple node ids: A, B, C, D, E, F
4. Label decision arrows: C -->|Yes| D and C -->|No| E

EXAMPLE:
flowchart TD
    A([Start])
    A --> B[/Read input/]
    B --> C{{Is valid?}}
    C -->|Yes| D[Process]
    C -->|No| E[/Show error/]
    D --> F([End])
    E --> F

Return ONLY the Mermaid syntax, no explanations."#
    )
}

pub fn mindmap(input: &str) -> String {
    format!(
        r#"Create a comprehensive Mermaid mindmap for: "{input}"

Break the topic into 3-6 main categories, subtopics beneath them, and
specific details as tertiary branches. Maximum 4 levels.

FORMAT:
mindmap
  root((Main Topic))
    Category 1
      Subtopic A
        Detail 1
      Subtopic B
    Category 2
      Subtopic C

Return ONLY the Mermaid mindmap code, no explanations."#
    )
}

pub fn gantt(input: &str) -> String {
    format!(
        r#"Create a Mermaid Gantt chart for this project or timeline: "{input}"

Break the work into logical sections/phases with realistic durations and
dependencies. Include milestones with the :milestone keyword.

EXAMPLE:
gantt
    title Web Development Project
    dateFormat  YYYY-MM-DD
    section Planning
    Requirements    :done, req, 2024-01-01, 7d
    Design          :done, design, after req, 14d
    section Development
    Frontend        :active, frontend, 2024-01-22, 21d
    Backend         :backend, after frontend, 14d
    section Testing
    Testing         :test, after backend, 7d
    Deployment      :milestone, deploy, after test, 1d

Return ONLY the Mermaid syntax, no explanations."#
    )
}

pub fn pie(input: &str) -> String {
    format!(
        r#"Create a Mermaid pie chart for the data or topic: "{input}"

Extract or estimate meaningful percentages with clear labels. Values should
add up to roughly 100; keep it to at most 6-8 slices.

EXAMPLE:
pie title Customer Satisfaction
    "Very Satisfied" : 42
    "Satisfied" : 35
    "Neutral" : 15
    "Dissatisfied" : 8

Return ONLY the Mermaid syntax, no explanations."#
    )
}

pub fn quadrant(input: &str) -> String {
    format!(
        r#"Create a Mermaid quadrant chart for this analysis: "{input}"

Define meaningful X and Y axes, use descriptive quadrant labels, and place
5-12 items on a 0-1 scale.

EXAMPLE:
quadrantChart
    title Analysis Matrix
    x-axis Low --> High
    y-axis Low --> High
    quadrant-1 High Impact, Low Effort
    quadrant-2 High Impact, High Effort
    quadrant-3 Low Impact, Low Effort
    quadrant-4 Low Impact, High Effort
    Item A: [0.3, 0.6]
    Item B: [0.45, 0.80]

Return ONLY the Mermaid syntax, no explanations."#
    )
}

pub fn journey(input: &str) -> String {
    format!(
        r#"Create a Mermaid user journey map for: "{input}"

Break the journey into sections, rate each step 1-5 (1=frustrated,
5=delighted), and keep the user's perspective.

EXAMPLE:
journey
    title User Experience Journey
    section Discovery
      Find website     : 5: User
      Browse products  : 3: User
    section Purchase
      Add to cart      : 2: User
      Checkout         : 1: User

Return ONLY the Mermaid syntax, no explanations."#
    )
}

pub fn git(input: &str) -> String {
    format!(
        r#"Create a Mermaid git graph for this development workflow: "{input}"

Show the main branch, feature branches, merge points, and descriptive
commit messages.

EXAMPLE:
gitgraph
    commit id: "Initial commit"
    branch feature-login
    checkout feature-login
    commit id: "Add login form"
    commit id: "Add validation"
    checkout main
    merge feature-login
    commit id: "Release v1.1"

Return ONLY the Mermaid syntax, no explanations."#
    )
}

pub fn state(input: &str) -> String {
    format!(
        r#"Create a Mermaid state diagram for: "{input}"

Identify the states, label the transitions with their triggers, and include
start [*] and end states.

EXAMPLE:
stateDiagram-v2
    [*] --> Draft
    Draft --> InReview: submit
    InReview --> Approved: approve
    InReview --> Draft: request changes
    Approved --> Published: publish
    Published --> [*]

Return ONLY the Mermaid syntax, no explanations."#
    )
}

pub fn class(input: &str) -> String {
    format!(
        r#"Create a Mermaid class diagram for: "{input}"

Show the main classes/entities with key attributes and methods (+ public,
- private) and the relationships between them.

EXAMPLE:
classDiagram
    class User {{
        +id: string
        +name: string
        +login(): boolean
    }}
    class Order {{
        +orderId: string
        +total: number
        +calculate(): number
    }}
    User ||--o{{ Order: places

Return ONLY the Mermaid syntax, no explanations."#
    )
}

pub fn timeline(input: &str) -> String {
    format!(
        r#"Create a Mermaid timeline flowchart for: "{input}"

Arrange events chronologically, using time periods as arrow labels where
relevant.

USE FLOWCHART FORMAT FOR THE TIMELINE:
flowchart TD
    A([Ancient Times])
    A -->|3000 BC| B[Early Development]
    B -->|1000 AD| C[Major Advancement]
    C -->|Modern Era| D[Current State]

Return ONLY the Mermaid syntax, no explanations."#
    )
}

pub fn sequence(input: &str) -> String {
    format!(
        r#"Create a Mermaid sequence diagram showing the interactions in: "{input}"

Identify the main participants and the flow of messages between them. Use
->> for requests/actions and -->> for responses/returns.

EXAMPLE:
sequenceDiagram
    participant A as First Party
    participant B as Second Party
    A->>B: Initial action
    B-->>A: Final response

Return ONLY the Mermaid syntax, no explanations."#
    )
}
