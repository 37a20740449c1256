use std::error::Error;

use sandbox::{
    domain::{Customer, CustomerId, CustomerOverrides, HashCode},
    global::Singleton,
    progression::IntProgression,
    SandboxConfig,
};
use tracing::{error, info, Level};

fn main() {
    match SandboxConfig::load() {
        Ok(config) => {
            tracing_subscriber::fmt()
                .with_max_level(Level::from(&config.logger.level))
                .init();
            if let Err(error) = run() {
                error!("アプリケーションエラー: {}", error);
            }
        }
        Err(error) => {
            tracing_subscriber::fmt::init();
            error!("アプリケーションエラー: {}", error)
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    customers();
    singleton();
    progressions()?;
    Ok(())
}

fn customers() {
    let mut customer = Customer::new(
        CustomerId::from(1),
        "Alice".to_owned(),
        "alice@example.com".to_owned(),
    );
    info!("顧客: {}", customer);

    let copied = customer.copy(CustomerOverrides::default().name("Bob".to_owned()));
    info!("複製: {}", copied);
    info!(
        "等価: {}, ハッシュ: {} / {}",
        customer == copied,
        customer.hash_code(),
        copied.hash_code()
    );

    customer.set_email("alice@example.org".to_owned());
    info!("メール変更後: {}", customer);

    match Customer::builder(CustomerId::from(2))
        .name("Carol".to_owned())
        .build()
    {
        Ok(customer) => info!("顧客: {}", customer),
        Err(e) => error!("顧客の生成に失敗: {}", e),
    }
}

fn singleton() {
    let singleton = Singleton::instance();
    info!("タイトル: {}", singleton.title());
    singleton.set_title("local title".to_owned());
    info!("タイトル: {}", Singleton::instance().title());
}

fn progressions() -> Result<(), Box<dyn Error>> {
    let range = IntProgression::range_to(1, 5);
    info!("{} => {:?}", range, range.iter().collect::<Vec<_>>());
    let down = IntProgression::down_to(7, 1).step(2)?;
    info!("{} => {:?}", down, down.iter().collect::<Vec<_>>());
    Ok(())
}
