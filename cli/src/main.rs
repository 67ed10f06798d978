use clap::{Parser, Subcommand};
use mentora::model::entity::{
    Course,
    CourseCreate,
    CourseModule,
    CourseModuleCreate,
    Lesson,
    LessonCreate,
    Mentorship,
    MentorshipCreate,
    Question,
    QuestionCreate,
    Quiz,
    QuizCreate,
};
use mentora::model::{CrudRepository, DatabaseError, DbConnection, ModelManager};
use mentora::web::{AuthenticatedUser, UserRole};

#[derive(Parser, Debug)]
#[command(about = "CLI tool for filling the marketplace DB", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage courses
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },

    /// Manage course modules
    Module {
        #[command(subcommand)]
        action: ModuleCommands,
    },

    /// Manage lessons
    Lesson {
        #[command(subcommand)]
        action: LessonCommands,
    },

    /// Manage module quizzes
    Quiz {
        #[command(subcommand)]
        action: QuizCommands,
    },

    /// Manage mentorship offerings
    Mentorship {
        #[command(subcommand)]
        action: MentorshipCommands,
    },
}

/// Course management
#[derive(Subcommand, Debug)]
pub enum CourseCommands {
    Add {
        /// Mentor owning the course
        #[arg(long)]
        mentor: uuid::Uuid,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        category: String,
        #[arg(long, default_value_t = 0.0)]
        price: f64,
        #[arg(long, default_value = "draft")]
        status: String,
    },
}

/// Module management
#[derive(Subcommand, Debug)]
pub enum ModuleCommands {
    Add {
        /// Course title to attach the module to
        #[arg(long)]
        course_title: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long, default_value_t = 0)]
        order_index: i32,
    },
}

/// Lesson management
#[derive(Subcommand, Debug)]
pub enum LessonCommands {
    Add {
        /// Module title to attach the lesson to
        #[arg(long)]
        module_title: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "text")]
        content_type: String,
        /// Path to a Markdown file with lesson content
        #[arg(long)]
        file: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long, default_value_t = 0)]
        order_index: i32,
    },
}

/// Quiz management
#[derive(Subcommand, Debug)]
pub enum QuizCommands {
    Add {
        /// Module title to attach the quiz to
        #[arg(long)]
        module_title: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        passing_score: Option<i32>,
    },
    AddQuestion {
        /// Quiz title to attach the question to
        #[arg(long)]
        quiz_title: String,
        #[arg(long)]
        question: String,
        /// Answer options, repeat the flag once per option
        #[arg(long = "option")]
        options: Vec<String>,
        /// Index into the options list
        #[arg(long)]
        correct_answer: i32,
        #[arg(long, default_value_t = 0)]
        order_index: i32,
    },
}

/// Mentorship management
#[derive(Subcommand, Debug)]
pub enum MentorshipCommands {
    Add {
        /// Mentor offering the sessions
        #[arg(long)]
        mentor: uuid::Uuid,
        #[arg(long)]
        title: String,
        #[arg(long)]
        specialty: String,
        #[arg(long)]
        description: String,
        #[arg(long, default_value_t = 0.0)]
        price_per_hour: f64,
        #[arg(long, default_value_t = true)]
        available: bool,
    },
}

#[tokio::main]
async fn main() -> mentora::error::AppResult<()> {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    let db_con = DbConnection::connect(&std::env::var("DATABASE_URL").unwrap())?;
    let mm = ModelManager::new(db_con);
    let actor = AuthenticatedUser::admin();

    match args.command {
        Commands::Course { action } => match action {
            CourseCommands::Add { mentor, title, description, category, price, status } => {
                // courses are owned by the acting mentor
                let mentor_actor = AuthenticatedUser::new(mentor, UserRole::Mentor);
                let course = Course::create(
                    &mm,
                    &mentor_actor,
                    CourseCreate {
                        title,
                        description,
                        category,
                        price,
                        status: Some(status),
                    },
                )
                .await?;
                println!("Course created: {:?}", course);
            }
        },

        Commands::Module { action } => match action {
            ModuleCommands::Add { course_title, title, description, order_index } => {
                let course_id: uuid::Uuid =
                    sqlx::query_scalar("SELECT id FROM courses WHERE title = $1")
                        .bind(&course_title)
                        .fetch_one(mm.executor())
                        .await
                        .map_err(DatabaseError::SqlxError)?;

                let module = CourseModule::create(
                    &mm,
                    &actor,
                    CourseModuleCreate {
                        course_id,
                        title,
                        description,
                        order_index: Some(order_index),
                    },
                )
                .await?;
                println!("Module created: {:?}", module);
            }
        },

        Commands::Lesson { action } => match action {
            LessonCommands::Add { module_title, title, content_type, file, url, order_index } => {
                let module_id: uuid::Uuid =
                    sqlx::query_scalar("SELECT id FROM course_modules WHERE title = $1")
                        .bind(&module_title)
                        .fetch_one(mm.executor())
                        .await
                        .map_err(DatabaseError::SqlxError)?;

                let content_text = match file {
                    Some(path) => Some(std::fs::read_to_string(path)?),
                    None => None,
                };
                let lesson = Lesson::create(
                    &mm,
                    &actor,
                    LessonCreate {
                        module_id,
                        title,
                        content_type,
                        content_url: url,
                        content_text,
                        order_index: Some(order_index),
                    },
                )
                .await?;
                println!("Lesson created: {:?}", lesson);
            }
        },

        Commands::Quiz { action } => match action {
            QuizCommands::Add { module_title, title, passing_score } => {
                let module_id: uuid::Uuid =
                    sqlx::query_scalar("SELECT id FROM course_modules WHERE title = $1")
                        .bind(&module_title)
                        .fetch_one(mm.executor())
                        .await
                        .map_err(DatabaseError::SqlxError)?;

                let quiz = Quiz::create(
                    &mm,
                    &actor,
                    QuizCreate {
                        module_id,
                        title,
                        passing_score,
                    },
                )
                .await?;
                println!("Quiz created: {:?}", quiz);
            }

            QuizCommands::AddQuestion {
                quiz_title,
                question,
                options,
                correct_answer,
                order_index,
            } => {
                let quiz_id: uuid::Uuid =
                    sqlx::query_scalar("SELECT id FROM module_quizzes WHERE title = $1")
                        .bind(&quiz_title)
                        .fetch_one(mm.executor())
                        .await
                        .map_err(DatabaseError::SqlxError)?;

                let question = Question::create(
                    &mm,
                    &actor,
                    QuestionCreate {
                        quiz_id,
                        question,
                        options,
                        correct_answer,
                        order_index: Some(order_index),
                    },
                )
                .await?;
                println!("Question created: {:?}", question);
            }
        },

        Commands::Mentorship { action } => match action {
            MentorshipCommands::Add {
                mentor,
                title,
                specialty,
                description,
                price_per_hour,
                available,
            } => {
                let mentor_actor = AuthenticatedUser::new(mentor, UserRole::Mentor);
                let mentorship = Mentorship::create(
                    &mm,
                    &mentor_actor,
                    MentorshipCreate {
                        title,
                        specialty,
                        description,
                        price_per_hour,
                        available: Some(available),
                    },
                )
                .await?;
                println!("Mentorship created: {:?}", mentorship);
            }
        },
    }

    Ok(())
}
