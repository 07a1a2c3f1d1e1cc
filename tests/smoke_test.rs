use payslip_core::{
    init,
    ledger::{add_line_item, update_line_item, LineItemField},
    payslip::PayslipForm,
};

#[test]
fn form_to_snapshot_smoke() {
    init();

    let mut form = PayslipForm::sample();
    form.employee_name = "Meera Iyer".into();
    form.employee_id = "EMP-0456".into();

    form.ledger.earnings = add_line_item(&form.ledger.earnings);
    let index = form.ledger.earnings.len() - 1;
    form.ledger.earnings =
        update_line_item(&form.ledger.earnings, index, LineItemField::Name, "Overtime");
    form.ledger.earnings =
        update_line_item(&form.ledger.earnings, index, LineItemField::Amount, "₹2,500");

    let payslip = form.snapshot();
    assert_eq!(payslip.net_pay, "₹44,300");
    assert_eq!(payslip.export_file_name(), "Payslip_Meera Iyer_EMP-0456.pdf");
    assert_eq!(payslip.earnings.len(), 4);

    // The snapshot is frozen; later edits stay out of it.
    form.ledger.deductions = add_line_item(&form.ledger.deductions);
    assert_eq!(payslip.deductions.len(), 3);
}
