use chrono::NaiveDateTime;
use minorm::db::Config;

#[derive(Debug, minorm::Model)]
#[table = "Users"]
struct User {
    #[key]
    #[column("Id")]
    id: i32,

    #[column("Username")]
    username: String,

    #[column("Password")]
    password: String,

    #[column("Age")]
    age: i32,

    #[column("RegistrationDate")]
    registration_date: NaiveDateTime,
}

impl User {
    fn new(username: &str, age: i32) -> User {
        User {
            id: 0,
            username: username.to_string(),
            password: "changeme".to_string(),
            age,
            registration_date: chrono::Local::now().naive_local(),
        }
    }
}

#[tokio::main]
async fn main() -> minorm::Result<()> {
    env_logger::init();

    // Pass a URL such as `sqlite:hello.db?timeout=500` to use a file
    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sqlite::memory:".to_string());

    let mut config = Config::new(url);
    config.code_first = true;
    let db = config.connect().await?;
    log::info!("connected; url={}", db.driver().url());

    println!("==> persist(john)");
    let mut john = User::new("john", 34);
    db.persist(&mut john).await?;
    println!("{john:#?}");

    println!("==> persist(nancy)");
    let mut nancy = User::new("nancy", 17);
    db.persist(&mut nancy).await?;
    println!("assigned id = {}", nancy.id);

    println!("==> update nancy");
    nancy.age += 1;
    let updated = db.persist(&mut nancy).await?;
    println!("updated = {updated}");

    println!("==> find_by_id({})", john.id);
    let user = db.find_by_id::<User>(john.id).await?;
    println!("{user:#?}");

    println!("==> find_all(Age >= 18)");
    for user in db.find_all::<User>(Some("Age >= 18")).await? {
        println!("  {} ({}), password={}", user.username, user.age, user.password);
    }

    println!("==> find_first(Age > 99)");
    let oldest = db.find_first::<User>(Some("Age > 99")).await?;
    println!("{oldest:?}");

    println!("==> find_by_id(42)");
    match db.find_by_id::<User>(42).await {
        Ok(user) => println!("{user:?}"),
        Err(err) if err.is_record_not_found() => println!("not found: {err}"),
        Err(err) => return Err(err),
    }

    Ok(())
}
