pub mod a001_contact_form;
