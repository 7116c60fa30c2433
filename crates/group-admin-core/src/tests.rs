//! Gateway Scenario Tests
//!
//! Drive the view state machines against a recording in-memory gateway,
//! the same way the UI handlers do.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;

    use crate::{
        Ack, ApiError, ApiResult, ComposeError, ComposeFlow, ComposePhase, Gateway, GroupId,
        GroupNode, GroupTree, MessageHistory, MessageId, MessageRecord, MessageUpdate, NoticeBoard,
        NoticeKind, Priority, SendMessageRequest, SendReceipt, Stats, UploadFile,
        validate_spreadsheet,
    };

    #[derive(Default)]
    struct RecordingGateway {
        calls: RefCell<Vec<String>>,
        fail: bool,
        forest: Vec<GroupNode>,
        history: Vec<MessageRecord>,
    }

    impl RecordingGateway {
        fn failing() -> Self {
            Self { fail: true, ..Default::default() }
        }

        fn record(&self, call: String) -> ApiResult<()> {
            self.calls.borrow_mut().push(call);
            if self.fail {
                Err(ApiError::Status { status: 500, body: "boom".into() })
            } else {
                Ok(())
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl Gateway for RecordingGateway {
        async fn upload_groups(&self, file: UploadFile) -> ApiResult<Ack> {
            self.record(format!("upload_groups {}", file.name))?;
            Ok(Ack { status: "Groups uploaded".into() })
        }

        async fn upload_contacts(&self, group_id: &GroupId, file: UploadFile) -> ApiResult<Ack> {
            self.record(format!("upload_contacts {} {}", group_id, file.name))?;
            Ok(Ack { status: "Contacts uploaded".into() })
        }

        async fn hierarchy(&self, name_filter: Option<&str>) -> ApiResult<Vec<GroupNode>> {
            self.record(format!("hierarchy {:?}", name_filter))?;
            Ok(self.forest.clone())
        }

        async fn stats(&self) -> ApiResult<Stats> {
            self.record("stats".into())?;
            Ok(Stats::default())
        }

        async fn send_message(&self, request: &SendMessageRequest) -> ApiResult<SendReceipt> {
            self.record(format!("send {} {}", request.group_id, request.content))?;
            Ok(SendReceipt { status: "sent".into(), group_ids: vec![request.group_id.clone()] })
        }

        async fn message_history(&self) -> ApiResult<Vec<MessageRecord>> {
            self.record("history".into())?;
            Ok(self.history.clone())
        }

        async fn update_message(&self, id: MessageId, _update: &MessageUpdate) -> ApiResult<Ack> {
            self.record(format!("update {}", id))?;
            Ok(Ack::default())
        }

        async fn delete_message(&self, id: MessageId) -> ApiResult<Ack> {
            self.record(format!("delete {}", id))?;
            Ok(Ack { status: "Message deleted".into() })
        }

        async fn messages_for_contact(&self, phone_number: &str) -> ApiResult<Vec<MessageRecord>> {
            self.record(format!("contact {}", phone_number))?;
            Ok(Vec::new())
        }
    }

    fn message(id: i64) -> MessageRecord {
        MessageRecord {
            id: MessageId(id),
            group: "CSE".into(),
            content: format!("message {}", id),
            priority: Priority::Low,
            expiry: "2025-03-20 09:00".into(),
            timestamp: "2025-03-13 09:00".into(),
        }
    }

    async fn send_draft(gateway: &RecordingGateway, flow: &mut ComposeFlow, notices: &mut NoticeBoard) {
        match flow.begin_send() {
            Ok(request) => {
                let result = gateway.send_message(&request).await;
                flow.finish(result);
                match &flow.phase {
                    ComposePhase::Failed(msg) => {
                        notices.push(NoticeKind::Error, "Failed to send message", msg.clone());
                    }
                    _ => {
                        notices.push(NoticeKind::Success, "Message sent!", "");
                    }
                }
            }
            Err(err) => {
                notices.push(NoticeKind::Error, "Cannot send", err.to_string());
            }
        }
    }

    async fn delete(gateway: &RecordingGateway, history: &mut MessageHistory, id: MessageId, notices: &mut NoticeBoard) {
        let id = match history.begin_delete(id) {
            Ok(id) => id,
            Err(err) => {
                notices.push(NoticeKind::Error, "Invalid message ID", err.to_string());
                return;
            }
        };
        let result = gateway.delete_message(id).await;
        match history.finish_delete(id, result) {
            Ok(()) => notices.push(NoticeKind::Success, "Message deleted", ""),
            Err(err) => notices.push(NoticeKind::Error, "Delete failed", err.user_message()),
        };
    }

    #[tokio::test]
    async fn test_empty_message_never_reaches_gateway() {
        let gateway = RecordingGateway::default();
        let mut notices = NoticeBoard::new();

        let mut flow = ComposeFlow::new(7);
        flow.select_group(Some(GroupId::from(1u64)));
        flow.set_content("   ".into());
        send_draft(&gateway, &mut flow, &mut notices).await;

        let mut flow = ComposeFlow::new(7);
        flow.set_content("Hello".into());
        send_draft(&gateway, &mut flow, &mut notices).await;

        assert!(gateway.calls().is_empty());
        assert_eq!(notices.items().len(), 2);
        assert!(notices.items().iter().all(|n| n.kind == NoticeKind::Error));
        assert_eq!(notices.items()[1].description, ComposeError::NoGroup.to_string());
    }

    #[tokio::test]
    async fn test_send_success_and_failure() {
        let gateway = RecordingGateway::default();
        let mut notices = NoticeBoard::new();
        let mut flow = ComposeFlow::new(7);
        flow.select_group(Some(GroupId::from(9u64)));
        flow.set_content("Fee deadline extended".into());

        send_draft(&gateway, &mut flow, &mut notices).await;
        assert_eq!(gateway.calls(), vec!["send 9 Fee deadline extended".to_string()]);
        assert_eq!(flow.phase, ComposePhase::Sent);
        assert_eq!(notices.items()[0].kind, NoticeKind::Success);

        let failing = RecordingGateway::failing();
        flow.select_group(Some(GroupId::from(9u64)));
        flow.set_content("Retry me".into());
        send_draft(&failing, &mut flow, &mut notices).await;
        assert!(matches!(flow.phase, ComposePhase::Failed(_)));
        assert_eq!(flow.draft.content, "Retry me");
        assert_eq!(notices.items()[1].kind, NoticeKind::Error);
    }

    #[tokio::test]
    async fn test_delete_42_after_ack() {
        let gateway = RecordingGateway::default();
        let mut notices = NoticeBoard::new();
        let mut history = MessageHistory::new();
        history.replace(vec![message(42), message(41)]);

        delete(&gateway, &mut history, MessageId(42), &mut notices).await;

        assert_eq!(gateway.calls(), vec!["delete 42".to_string()]);
        assert_eq!(history.len(), 1);
        assert_eq!(history.records()[0].id, MessageId(41));
        assert_eq!(notices.items()[0].kind, NoticeKind::Success);
    }

    #[tokio::test]
    async fn test_delete_42_failure_keeps_list() {
        let gateway = RecordingGateway::failing();
        let mut notices = NoticeBoard::new();
        let mut history = MessageHistory::new();
        history.replace(vec![message(42), message(41)]);

        delete(&gateway, &mut history, MessageId(42), &mut notices).await;

        assert_eq!(history.len(), 2);
        assert!(!history.is_deleting(MessageId(42)));
        assert_eq!(notices.items()[0].kind, NoticeKind::Error);
        assert_eq!(notices.items()[0].title, "Delete failed");
    }

    #[tokio::test]
    async fn test_invalid_delete_id_is_not_sent() {
        let gateway = RecordingGateway::default();
        let mut notices = NoticeBoard::new();
        let mut history = MessageHistory::new();
        history.replace(vec![message(42)]);

        delete(&gateway, &mut history, MessageId(0), &mut notices).await;

        assert!(gateway.calls().is_empty());
        assert_eq!(notices.items()[0].title, "Invalid message ID");
    }

    #[tokio::test]
    async fn test_load_hierarchy_into_tree() {
        let gateway = RecordingGateway {
            forest: vec![GroupNode::new(1u64, "A")
                .with_contacts(2)
                .with_children(vec![GroupNode::new(2u64, "B").with_contacts(3)])],
            ..Default::default()
        };
        let mut tree = GroupTree::new();
        let forest = gateway.hierarchy(Some("A")).await.unwrap();
        tree.load(forest);

        assert_eq!(gateway.calls(), vec!["hierarchy Some(\"A\")".to_string()]);
        assert_eq!(tree.summary().nodes, 2);
        assert_eq!(tree.summary().contacts, 5);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_tree() {
        let gateway = RecordingGateway::failing();
        let mut tree = GroupTree::new();
        tree.load(vec![GroupNode::new(1u64, "A")]);

        if let Ok(forest) = gateway.hierarchy(None).await {
            tree.load(forest);
        }
        assert_eq!(tree.version(), 1);
        assert_eq!(tree.roots()[0].name, "A");
    }

    #[tokio::test]
    async fn test_upload_rejects_non_spreadsheet_before_request() {
        let gateway = RecordingGateway::default();
        let file = UploadFile { name: "notes.txt".into(), mime: "text/plain".into(), bytes: vec![1, 2] };

        let result = match validate_spreadsheet(&file.name, &file.mime) {
            Ok(()) => gateway.upload_groups(file).await,
            Err(err) => Err(err),
        };
        assert!(result.unwrap_err().is_validation());
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_edit_round_trip_through_gateway() {
        let gateway = RecordingGateway::default();
        let mut history = MessageHistory::new();
        history.replace(vec![message(5)]);
        history.begin_edit(MessageId(5)).unwrap();
        history.editing_mut().unwrap().content = "changed".into();

        let (id, update) = history.begin_save().unwrap();
        let result = gateway.update_message(id, &update).await;
        history.finish_save(id, &update, result).unwrap();

        assert_eq!(gateway.calls(), vec!["update 5".to_string()]);
        assert_eq!(history.records()[0].content, "changed");
    }
}
