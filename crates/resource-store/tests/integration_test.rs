use async_trait::async_trait;
use resource_store::{FrameworkError, ResourceActor, StoredEntity, Timestamps};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Note {
    id: u32,
    shelf: String,
    body: String,
    stamps: Timestamps,
}

#[derive(Debug)]
struct NoteCreate {
    shelf: String,
    body: String,
}

#[derive(Debug)]
struct NoteUpdate {
    body: Option<String>,
}

#[derive(Debug, Default)]
struct NoteFilter {
    shelf: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum NoteError {
    #[error("Note body must not be empty")]
    EmptyBody,
    #[error("Pinned notes cannot be deleted")]
    Pinned,
}

#[async_trait]
impl StoredEntity for Note {
    type Id = u32;
    type Create = NoteCreate;
    type Update = NoteUpdate;
    type Filter = NoteFilter;
    type Context = ();
    type Error = NoteError;

    fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Self::Error> {
        if params.body.is_empty() {
            return Err(NoteError::EmptyBody);
        }
        Ok(Self {
            id,
            shelf: params.shelf,
            body: params.body,
            stamps: Timestamps::default(),
        })
    }

    fn id(&self) -> &u32 {
        &self.id
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.stamps
    }

    fn matches(&self, filter: &NoteFilter) -> bool {
        filter.shelf.as_ref().map_or(true, |shelf| &self.shelf == shelf)
    }

    async fn on_update(&mut self, update: NoteUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(body) = update.body {
            self.body = body;
        }
        if self.body.is_empty() {
            return Err(NoteError::EmptyBody);
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
        if self.shelf == "pinned" {
            return Err(NoteError::Pinned);
        }
        Ok(())
    }
}

fn note(shelf: &str, body: &str) -> NoteCreate {
    NoteCreate {
        shelf: shelf.into(),
        body: body.into(),
    }
}

fn shelf(name: &str) -> NoteFilter {
    NoteFilter {
        shelf: Some(name.into()),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_store_full_lifecycle() {
    let (actor, client) = ResourceActor::<Note>::new(10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Create assigns sequential ids and stamps both timestamps
    let first = client.create(note("inbox", "buy scarf")).await.unwrap();
    let second = client.create(note("archive", "old receipt")).await.unwrap();
    let third = client.create(note("inbox", "call supplier")).await.unwrap();
    assert_eq!((first.id, second.id, third.id), (1, 2, 3));
    assert_eq!(first.stamps.created_at, first.stamps.updated_at);

    // 2. Get
    let fetched = client.get(2).await.unwrap().unwrap();
    assert_eq!(fetched.body, "old receipt");
    assert!(client.get(99).await.unwrap().is_none());

    // 3. List keeps store order and honours filter and limit
    let all = client.list(None, None).await.unwrap();
    assert_eq!(all.iter().map(|n| n.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    let inbox = client.list(Some(shelf("inbox")), None).await.unwrap();
    assert_eq!(inbox.iter().map(|n| n.id).collect::<Vec<_>>(), vec![1, 3]);
    let capped = client.list(None, Some(2)).await.unwrap();
    assert_eq!(capped.len(), 2);

    // 4. UpdateWhere touches only the first match and refreshes updated_at
    let changed = client
        .update_where(shelf("inbox"), NoteUpdate { body: Some("buy two scarves".into()) })
        .await
        .unwrap();
    assert_eq!(changed, 1);
    let updated = client.get(1).await.unwrap().unwrap();
    assert_eq!(updated.body, "buy two scarves");
    assert_eq!(updated.stamps.created_at, first.stamps.created_at);
    assert!(updated.stamps.updated_at >= first.stamps.updated_at);
    assert_eq!(client.get(3).await.unwrap().unwrap().body, "call supplier");

    // 5. No match is a zero count, not an error
    let none = client
        .update_where(shelf("missing"), NoteUpdate { body: None })
        .await
        .unwrap();
    assert_eq!(none, 0);
    assert_eq!(client.delete_where(shelf("missing")).await.unwrap(), 0);

    // 6. DeleteWhere
    assert_eq!(client.delete_where(shelf("archive")).await.unwrap(), 1);
    assert!(client.get(2).await.unwrap().is_none());
    let remaining = client.list(None, None).await.unwrap();
    assert_eq!(remaining.iter().map(|n| n.id).collect::<Vec<_>>(), vec![1, 3]);

    // 7. Ids are never reused
    let fourth = client.create(note("inbox", "ship order")).await.unwrap();
    assert_eq!(fourth.id, 4);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_hook_errors_reach_the_caller() {
    let (actor, client) = ResourceActor::<Note>::new(10);
    tokio::spawn(actor.run(()));

    let rejected = client.create(note("inbox", "")).await;
    match rejected {
        Err(err) => assert!(matches!(
            err.into_entity::<NoteError>(),
            Ok(NoteError::EmptyBody)
        )),
        Ok(_) => panic!("empty note should be rejected"),
    }

    let pinned = client.create(note("pinned", "returns policy")).await.unwrap();

    // A rejected update leaves the stored record as it was
    let cleared = client
        .update_where(shelf("pinned"), NoteUpdate { body: Some(String::new()) })
        .await;
    assert!(matches!(cleared, Err(FrameworkError::EntityError(_))));
    assert_eq!(client.get(pinned.id).await.unwrap(), Some(pinned));

    let blocked = client.delete_where(shelf("pinned")).await;
    assert!(matches!(blocked, Err(FrameworkError::EntityError(_))));
    assert_eq!(client.list(None, None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_refreshes_updated_at() {
    let (actor, client) = ResourceActor::<Note>::new(10);
    tokio::spawn(actor.run(()));

    let created = client.create(note("inbox", "draft")).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let changed = client
        .update_where(shelf("inbox"), NoteUpdate { body: Some("final".into()) })
        .await
        .unwrap();
    assert_eq!(changed, 1);

    let updated = client.get(created.id).await.unwrap().unwrap();
    assert_eq!(updated.stamps.created_at, created.stamps.created_at);
    assert!(updated.stamps.updated_at > created.stamps.created_at);
    assert!(updated.stamps.updated_at > created.stamps.updated_at);
}
