//! Real Account actor with a mocked catalog.
//!
//! The account actor asks the catalog whether a product exists before storing a non-zero
//! quantity, and lists the catalog to price a checkout. The mock scripts those answers.

use qkart::account_actor::AccountError;
use qkart::cart::QuantityUpdate;
use qkart::clients::{AccountClient, ActorClient, ProductClient};
use qkart::framework::mock::MockClient;
use qkart::model::{AddressId, CartEntry, Credentials, Product, ProductId};
use tokio::task::JoinHandle;

fn pen() -> Product {
    Product::new("p1", "Pen", "Stationery", 10.0, 4)
}

fn notebook() -> Product {
    Product::new("p2", "Notebook", "Stationery", 25.0, 5)
}

const ADDRESS: &str = "221B Baker Street, London NW1 6XE";

async fn start(product_mock: &MockClient<Product>) -> (AccountClient, JoinHandle<()>) {
    let (account_actor, account_client) = qkart::account_actor::new();
    let handle = tokio::spawn(account_actor.run(ProductClient::new(product_mock.client())));
    account_client
        .register(Credentials::new("crio.do", "learnbydoing"))
        .await
        .expect("Failed to register");
    (account_client, handle)
}

async fn stop(client: AccountClient, handle: JoinHandle<()>) {
    drop(client);
    handle.await.expect("Account actor panicked");
}

fn user() -> String {
    "crio.do".to_string()
}

#[tokio::test]
async fn test_checkout_prices_cart_through_catalog() {
    let mut product_mock = MockClient::<Product>::new();
    product_mock.expect_get(ProductId::from("p1")).return_ok(Some(pen()));
    product_mock.expect_get(ProductId::from("p2")).return_ok(Some(notebook()));
    product_mock.expect_list().return_ok(vec![pen(), notebook()]);

    let (accounts, handle) = start(&product_mock).await;

    accounts
        .set_cart_quantity(user(), QuantityUpdate::new("p1", 2))
        .await
        .unwrap();
    let cart = accounts
        .set_cart_quantity(user(), QuantityUpdate::new("p2", 1))
        .await
        .unwrap();
    assert_eq!(cart, vec![CartEntry::new("p1", 2), CartEntry::new("p2", 1)]);

    let addresses = accounts.add_address(user(), ADDRESS.to_string()).await.unwrap();
    let receipt = accounts
        .checkout(user(), addresses[0].id.clone())
        .await
        .expect("Checkout failed");
    assert_eq!(receipt.total, 45.0);
    assert_eq!(receipt.balance, 4955.0);

    assert!(accounts.cart(user()).await.unwrap().is_empty());
    let account = accounts.get(user()).await.unwrap().expect("Account not found");
    assert_eq!(account.balance, 4955.0);

    product_mock.verify();
    stop(accounts, handle).await;
}

#[tokio::test]
async fn test_removal_does_not_consult_catalog() {
    let mut product_mock = MockClient::<Product>::new();
    product_mock.expect_get(ProductId::from("p1")).return_ok(Some(pen()));

    let (accounts, handle) = start(&product_mock).await;
    accounts
        .set_cart_quantity(user(), QuantityUpdate::new("p1", 1))
        .await
        .unwrap();

    // No expectation queued: a catalog call here would fail the mock.
    let cart = accounts
        .set_cart_quantity(user(), QuantityUpdate::new("p1", 0))
        .await
        .unwrap();
    assert!(cart.is_empty());

    product_mock.verify();
    stop(accounts, handle).await;
}

#[tokio::test]
async fn test_unknown_product_is_refused() {
    let mut product_mock = MockClient::<Product>::new();
    product_mock.expect_get(ProductId::from("p9")).return_ok(None);

    let (accounts, handle) = start(&product_mock).await;
    let result = accounts
        .set_cart_quantity(user(), QuantityUpdate::new("p9", 1))
        .await;
    assert_eq!(result, Err(AccountError::ProductNotFound(ProductId::from("p9"))));
    assert_eq!(result.unwrap_err().to_string(), "Product doesn't exist");

    product_mock.verify();
    stop(accounts, handle).await;
}

#[tokio::test]
async fn test_checkout_refuses_stale_cart() {
    let mut product_mock = MockClient::<Product>::new();
    product_mock.expect_get(ProductId::from("p1")).return_ok(Some(pen()));
    // Withdrawn from the catalog between adding and paying.
    product_mock.expect_list().return_ok(vec![notebook()]);

    let (accounts, handle) = start(&product_mock).await;
    accounts
        .set_cart_quantity(user(), QuantityUpdate::new("p1", 1))
        .await
        .unwrap();
    let addresses = accounts.add_address(user(), ADDRESS.to_string()).await.unwrap();

    let result = accounts.checkout(user(), addresses[0].id.clone()).await;
    assert_eq!(result, Err(AccountError::StaleCart(vec![ProductId::from("p1")])));
    assert_eq!(accounts.cart(user()).await.unwrap().len(), 1);

    product_mock.verify();
    stop(accounts, handle).await;
}

#[tokio::test]
async fn test_checkout_refuses_insufficient_balance() {
    let mut product_mock = MockClient::<Product>::new();
    product_mock.expect_get(ProductId::from("p2")).return_ok(Some(notebook()));
    product_mock.expect_list().return_ok(vec![notebook()]);

    let (accounts, handle) = start(&product_mock).await;
    accounts
        .set_cart_quantity(user(), QuantityUpdate::new("p2", 201))
        .await
        .unwrap();
    let addresses = accounts.add_address(user(), ADDRESS.to_string()).await.unwrap();

    let result = accounts.checkout(user(), addresses[0].id.clone()).await;
    assert_eq!(
        result,
        Err(AccountError::InsufficientBalance {
            required: 5025.0,
            available: 5000.0
        })
    );
    let balance = accounts
        .authenticate(Credentials::new("crio.do", "learnbydoing"))
        .await
        .unwrap();
    assert_eq!(balance, 5000.0);

    product_mock.verify();
    stop(accounts, handle).await;
}

#[tokio::test]
async fn test_checkout_preconditions() {
    let mut product_mock = MockClient::<Product>::new();
    product_mock.expect_get(ProductId::from("p1")).return_ok(Some(pen()));

    let (accounts, handle) = start(&product_mock).await;

    let result = accounts.checkout(user(), AddressId::from("address_1")).await;
    assert_eq!(result, Err(AccountError::EmptyCart));

    accounts
        .set_cart_quantity(user(), QuantityUpdate::new("p1", 1))
        .await
        .unwrap();
    let result = accounts.checkout(user(), AddressId::from("address_1")).await;
    assert_eq!(
        result,
        Err(AccountError::AddressNotFound(AddressId::from("address_1")))
    );

    product_mock.verify();
    stop(accounts, handle).await;
}

#[tokio::test]
async fn test_address_book() {
    let product_mock = MockClient::<Product>::new();
    let (accounts, handle) = start(&product_mock).await;

    let result = accounts.add_address(user(), "Too short".to_string()).await;
    assert_eq!(result, Err(AccountError::AddressTooShort { min: 20 }));

    let first = accounts.add_address(user(), ADDRESS.to_string()).await.unwrap();
    let both = accounts
        .add_address(user(), "12 Grimmauld Place, London".to_string())
        .await
        .unwrap();
    assert_eq!(both.len(), 2);
    assert_ne!(both[0].id, both[1].id);

    let left = accounts
        .delete_address(user(), first[0].id.clone())
        .await
        .unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].address, "12 Grimmauld Place, London");

    let result = accounts.delete_address(user(), first[0].id.clone()).await;
    assert!(matches!(result, Err(AccountError::AddressNotFound(_))));

    stop(accounts, handle).await;
}

#[tokio::test]
async fn test_duplicate_registration_and_wrong_password() {
    let product_mock = MockClient::<Product>::new();
    let (accounts, handle) = start(&product_mock).await;

    let result = accounts
        .register(Credentials::new("crio.do", "another"))
        .await;
    assert_eq!(result, Err(AccountError::AlreadyExists("crio.do".to_string())));

    let result = accounts
        .authenticate(Credentials::new("crio.do", "wrong"))
        .await;
    assert_eq!(result, Err(AccountError::WrongPassword));

    let result = accounts
        .authenticate(Credentials::new("nobody", "learnbydoing"))
        .await;
    assert_eq!(result, Err(AccountError::UnknownUser("nobody".to_string())));

    stop(accounts, handle).await;
}
