//! Asynchronous submission handlers and the double-submit guard.

#![cfg(not(target_arch = "wasm32"))]

use product_form_pages::form::{ProductForm, ProductFormProps, SubmitHandler, SubmitOutcome};
use product_form_pages::{ElementView, ProductRecord, SubmitEvent, SubmitStatus};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

fn valid() -> ProductRecord {
	ProductRecord {
		id: 1,
		name: "Widget".to_string(),
		description: "A widget".to_string(),
		category: "electronics".to_string(),
		expire_date: "2030-12-31".to_string(),
		price: 19.99,
		quantity: 5,
	}
}

struct Harness {
	form: ProductForm,
	release: Arc<Notify>,
	completed: Arc<Mutex<Vec<ProductRecord>>>,
}

fn harness(record: ProductRecord) -> Harness {
	let release = Arc::new(Notify::new());
	let completed = Arc::new(Mutex::new(Vec::new()));

	let handler = SubmitHandler::new_async({
		let release = Arc::clone(&release);
		let completed = Arc::clone(&completed);
		move |record: ProductRecord| {
			let release = Arc::clone(&release);
			let completed = Arc::clone(&completed);
			async move {
				release.notified().await;
				completed.lock().unwrap().push(record);
			}
		}
	});

	Harness {
		form: ProductForm::new(ProductFormProps::new(handler).initial_data(record)),
		release,
		completed,
	}
}

fn submit_button_disabled(form: &ProductForm) -> bool {
	form.view()
		.find(&|el: &ElementView| el.tag_name() == "button")
		.map(|button| button.has_attr("disabled"))
		.unwrap_or(false)
}

#[tokio::test]
async fn test_submit_is_ignored_while_in_flight() {
	let Harness {
		form,
		release,
		completed,
	} = harness(valid());

	let pending = match form.submit(&SubmitEvent::new()) {
		SubmitOutcome::Pending(pending) => pending,
		other => panic!("expected pending submission, got {other:?}"),
	};
	assert_eq!(form.status(), SubmitStatus::Submitting);
	assert!(submit_button_disabled(&form));

	// Invalid edits are not validated while busy.
	form.set_field(product_form_pages::ProductField::Name, "");
	let busy_event = SubmitEvent::new();
	assert!(matches!(form.submit(&busy_event), SubmitOutcome::Busy));
	assert!(busy_event.default_prevented());
	assert!(form.errors().is_empty());

	release.notify_one();
	pending.await;

	assert_eq!(form.status(), SubmitStatus::Idle);
	assert!(!submit_button_disabled(&form));
	assert_eq!(completed.lock().unwrap().len(), 1);
	assert_eq!(completed.lock().unwrap()[0].name, "Widget");
}

#[tokio::test]
async fn test_dropping_pending_submission_releases_guard() {
	let Harness { form, .. } = harness(valid());

	let outcome = form.submit(&SubmitEvent::new());
	assert_eq!(form.status(), SubmitStatus::Submitting);

	drop(outcome);
	assert_eq!(form.status(), SubmitStatus::Idle);
	assert!(form.submit(&SubmitEvent::new()).is_accepted());
}

#[tokio::test]
async fn test_rejected_async_submit_never_engages_guard() {
	let Harness {
		form, completed, ..
	} = harness(ProductRecord::default());

	assert!(matches!(
		form.submit(&SubmitEvent::new()),
		SubmitOutcome::Rejected(_)
	));
	assert_eq!(form.status(), SubmitStatus::Idle);
	assert!(completed.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_sequential_async_submissions() {
	let Harness {
		form,
		release,
		completed,
	} = harness(valid());

	for _ in 0..2 {
		let SubmitOutcome::Pending(pending) = form.submit(&SubmitEvent::new()) else {
			panic!("expected pending submission");
		};
		release.notify_one();
		pending.await;
	}

	assert_eq!(*completed.lock().unwrap(), vec![valid(), valid()]);
	assert_eq!(form.record(), valid());
}
