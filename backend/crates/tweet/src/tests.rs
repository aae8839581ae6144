//! Unit and flow tests for the tweet crate

#[cfg(test)]
mod support {
    use auth::domain::entity::user::User;
    use auth::domain::repository::UserRepository;
    use auth::models::{
        email::Email,
        user_name::UserName,
        user_password::{RawPassword, UserPassword},
    };
    use auth::{AuthConfig, InMemoryAuthRepository, auth_router_generic};
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, Response, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::infra::memory::InMemoryTweetRepository;
    use crate::presentation::router::tweet_router_generic;

    pub struct TestApp {
        pub app: Router,
        pub users: InMemoryAuthRepository,
        pub tweets: InMemoryTweetRepository,
    }

    /// Auth and tweet routes over shared in-memory stores, as the binary merges them
    pub fn app() -> TestApp {
        let users = InMemoryAuthRepository::new();
        let tweets = InMemoryTweetRepository::new(users.clone());
        let config = AuthConfig::development();

        let app = auth_router_generic(users.clone(), config.clone()).merge(tweet_router_generic(
            users.clone(),
            tweets.clone(),
            config,
        ));

        TestApp { app, users, tweets }
    }

    pub async fn stored_user(users: &InMemoryAuthRepository, username: &str) -> User {
        let password = RawPassword::new("Abc123".to_string()).unwrap();
        let user = User::new(
            UserName::new(username).unwrap(),
            Email::new(format!("{username}@b.com")).unwrap(),
            UserPassword::from_raw(&password).unwrap(),
        );
        users.create(&user).await.unwrap();
        user
    }

    pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        app.clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_form(
        app: &Router,
        uri: &str,
        body: &str,
        cookie: Option<&str>,
    ) -> Response<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        app.clone()
            .oneshot(builder.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap()
    }

    pub async fn body_string(response: Response<Body>) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    pub fn location(response: &Response<Body>) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    /// Sign up through the router and return the session cookie
    pub async fn sign_up(app: &Router, username: &str) -> String {
        let body = format!("username={username}&email={username}%40b.com&password=Abc123");
        let response = post_form(app, "/signup", &body, None).await;
        assert_eq!(location(&response), "/userProfile");
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }
}

#[cfg(test)]
mod use_case_tests {
    use super::support::*;
    use auth::{AuthError, InMemoryAuthRepository};
    use kernel::id::UserId;
    use std::sync::Arc;

    use crate::application::{
        CreateTweetInput, CreateTweetUseCase, ListTweetsUseCase, ViewProfileUseCase,
    };
    use crate::error::TweetError;
    use crate::infra::memory::InMemoryTweetRepository;

    fn input(content: &str) -> CreateTweetInput {
        CreateTweetInput {
            content: content.to_string(),
            gif: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_tweet_owned_by_creator() {
        let users = InMemoryAuthRepository::new();
        let tweets = InMemoryTweetRepository::new(users.clone());
        let alice = stored_user(&users, "alice").await;

        let tweet = CreateTweetUseCase::new(Arc::new(tweets.clone()))
            .execute(
                alice.user_id,
                CreateTweetInput {
                    content: "  hi  ".into(),
                    gif: " ".into(),
                },
            )
            .await
            .unwrap();

        assert_eq!(tweet.creator_id, alice.user_id);
        assert_eq!(tweet.content.as_str(), "hi");
        assert!(tweet.gif.is_none());
        assert_eq!(tweets.stored().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_content_is_not_stored() {
        let users = InMemoryAuthRepository::new();
        let tweets = InMemoryTweetRepository::new(users.clone());
        let use_case = CreateTweetUseCase::new(Arc::new(tweets.clone()));

        let err = use_case.execute(UserId::new(), input("   ")).await.unwrap_err();
        assert!(matches!(err, TweetError::EmptyContent));

        let err = use_case
            .execute(UserId::new(), input(&"x".repeat(281)))
            .await
            .unwrap_err();
        assert!(matches!(err, TweetError::ContentTooLong { .. }));

        assert!(tweets.stored().is_empty());
    }

    #[tokio::test]
    async fn test_list_newest_first_with_creator() {
        let users = InMemoryAuthRepository::new();
        let tweets = InMemoryTweetRepository::new(users.clone());
        let alice = stored_user(&users, "alice").await;
        let create = CreateTweetUseCase::new(Arc::new(tweets.clone()));

        create.execute(alice.user_id, input("first")).await.unwrap();
        create.execute(alice.user_id, input("second")).await.unwrap();

        let listed = ListTweetsUseCase::new(Arc::new(tweets)).execute().await.unwrap();
        let contents: Vec<_> = listed.iter().map(|t| t.tweet.content.as_str()).collect();
        assert_eq!(contents, ["second", "first"]);
        assert!(listed.iter().all(|t| t.creator_name() == "alice"));
    }

    #[tokio::test]
    async fn test_view_profile_only_own_tweets() {
        let users = InMemoryAuthRepository::new();
        let tweets = InMemoryTweetRepository::new(users.clone());
        let alice = stored_user(&users, "alice").await;
        let bob = stored_user(&users, "bob").await;
        let create = CreateTweetUseCase::new(Arc::new(tweets.clone()));

        create.execute(alice.user_id, input("from alice")).await.unwrap();
        create.execute(bob.user_id, input("from bob")).await.unwrap();

        let profile = ViewProfileUseCase::new(Arc::new(users), Arc::new(tweets))
            .execute(&bob.user_id)
            .await
            .unwrap();

        assert_eq!(profile.user.username.as_str(), "bob");
        assert_eq!(profile.tweets.len(), 1);
        assert_eq!(profile.tweets[0].tweet.content.as_str(), "from bob");
    }

    #[tokio::test]
    async fn test_view_profile_missing_user() {
        let users = InMemoryAuthRepository::new();
        let tweets = InMemoryTweetRepository::new(users.clone());

        let err = ViewProfileUseCase::new(Arc::new(users), Arc::new(tweets))
            .execute(&UserId::new())
            .await
            .unwrap_err();

        assert!(matches!(err, TweetError::Auth(AuthError::UserNotFound)));
    }
}

#[cfg(test)]
mod router_tests {
    use super::support::*;
    use auth::domain::repository::UserRepository;
    use axum::http::{StatusCode, header};

    #[tokio::test]
    async fn test_routes_require_session() {
        let t = app();

        for uri in ["/userProfile", "/create-tweet", "/all-tweets"] {
            let response = get(&t.app, uri, None).await;
            assert_eq!(response.status(), StatusCode::FOUND, "{uri}");
            assert_eq!(location(&response), "/login");
        }

        let response = post_form(&t.app, "/create-tweet", "content=hi", None).await;
        assert_eq!(location(&response), "/login");
        assert!(t.tweets.stored().is_empty());
    }

    #[tokio::test]
    async fn test_create_tweet_then_list() {
        let t = app();
        let cookie = sign_up(&t.app, "alice").await;
        let alice = t.users.user_by_username("alice").unwrap();

        let response = post_form(&t.app, "/create-tweet", "content=hi", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/all-tweets");

        let stored = t.tweets.stored();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].creator_id, alice.user_id);

        let response = get(&t.app, "/all-tweets", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("<p>hi</p>"));
        assert!(body.contains(&format!(
            "<a href=\"/userProfile/{}\">alice</a>",
            alice.user_id
        )));
    }

    #[tokio::test]
    async fn test_create_tweet_form_errors() {
        let t = app();
        let cookie = sign_up(&t.app, "alice").await;

        let form = get(&t.app, "/create-tweet", Some(&cookie)).await;
        assert_eq!(form.status(), StatusCode::OK);

        let response = post_form(&t.app, "/create-tweet", "content=+++", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(
            body_string(response)
                .await
                .contains("Tweet content cannot be empty.")
        );

        let long = "x".repeat(281);
        let response = post_form(
            &t.app,
            "/create-tweet",
            &format!("content={long}&gif=https%3A%2F%2Fexample.com%2Fa.gif"),
            Some(&cookie),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_string(response).await;
        assert!(body.contains("too long"));
        assert!(body.contains("name=\"gif\" value=\"https:"));
        assert!(body.contains("example.com"));

        assert!(t.tweets.stored().is_empty());
    }

    #[tokio::test]
    async fn test_own_profile_lists_own_tweets() {
        let t = app();
        let bob_cookie = sign_up(&t.app, "bob").await;
        let cookie = sign_up(&t.app, "alice").await;

        post_form(&t.app, "/create-tweet", "content=mine", Some(&cookie)).await;
        post_form(&t.app, "/create-tweet", "content=theirs", Some(&bob_cookie)).await;

        let response = get(&t.app, "/userProfile", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("alice@b.com"));
        assert!(body.contains("<p>mine</p>"));
        assert!(!body.contains("<p>theirs</p>"));
    }

    #[tokio::test]
    async fn test_profile_by_id() {
        let t = app();
        let bob_cookie = sign_up(&t.app, "bob").await;
        let cookie = sign_up(&t.app, "alice").await;
        let bob = t.users.user_by_username("bob").unwrap();

        post_form(&t.app, "/create-tweet", "content=hello+from+bob", Some(&bob_cookie)).await;

        let response = get(&t.app, &format!("/userProfile/{}", bob.user_id), Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("<h1>bob</h1>"));
        assert!(body.contains("hello from bob"));
        assert!(!body.contains("bob@b.com"));
    }

    #[tokio::test]
    async fn test_profile_by_unknown_id() {
        let t = app();
        let cookie = sign_up(&t.app, "alice").await;

        let response = get(&t.app, "/userProfile/not-a-uuid", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let uri = format!("/userProfile/{}", uuid::Uuid::new_v4());
        let response = get(&t.app, &uri, Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("User not found"));
    }

    #[tokio::test]
    async fn test_tweets_of_deleted_user_are_orphaned() {
        let t = app();
        let bob_cookie = sign_up(&t.app, "bob").await;
        let cookie = sign_up(&t.app, "alice").await;
        let bob = t.users.user_by_username("bob").unwrap();

        post_form(&t.app, "/create-tweet", "content=bye", Some(&bob_cookie)).await;
        let response = post_form(
            &t.app,
            &format!("/userProfile/{}/delete", bob.user_id),
            "",
            Some(&bob_cookie),
        )
        .await;
        assert_eq!(location(&response), "/signup");

        let body = body_string(get(&t.app, "/all-tweets", Some(&cookie)).await).await;
        assert!(body.contains("<p>bye</p>"));
        assert!(body.contains("[deleted user]"));

        // The deleted account's cookie no longer works
        let response = get(&t.app, "/all-tweets", Some(&bob_cookie)).await;
        assert_eq!(location(&response), "/login");
    }

    #[tokio::test]
    async fn test_own_profile_of_vanished_user_ends_session() {
        let t = app();
        let cookie = sign_up(&t.app, "alice").await;
        let alice = t.users.user_by_username("alice").unwrap();

        // Remove the row only; the session survives until the next request
        t.users.delete_by_id(&alice.user_id).await.unwrap();
        assert_eq!(t.users.session_count(), 1);

        let response = get(&t.app, "/userProfile", Some(&cookie)).await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(location(&response), "/login");
        let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(set_cookie.contains("Max-Age=0"));
        assert_eq!(t.users.session_count(), 0);
    }
}
